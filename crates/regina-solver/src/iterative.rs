//! Explicit-stack first-solution search.
//!
//! Behaviorally identical to the recursive solver — same column order,
//! same backtrack count, same final board — but the frame stack is a
//! value on the heap, so call-stack depth is never a dependency and the
//! loop has a natural step boundary between placements.

use std::time::Instant;

use regina_core::{BoardState, Solution};
use smallvec::SmallVec;
use tracing::debug;

use crate::stats::SearchStats;

/// Per-row resume point. Depth is bounded by `n`, so the stack lives
/// inline for every board size the engine targets.
type CursorStack = SmallVec<[usize; 32]>;

/// Finds the deterministic first solution without call-stack recursion.
///
/// Produces bit-for-bit the same solution as
/// [`solve_first`](crate::solve_first) for every `n`; the equivalence is
/// cross-checked in the integration tests.
///
/// # Example
///
/// ```
/// use regina_solver::{solve_first, solve_iterative};
///
/// assert_eq!(solve_iterative(8), solve_first(8));
/// assert!(solve_iterative(2).is_none());
/// ```
pub fn solve_iterative(n: usize) -> Option<Solution> {
    let mut stats = SearchStats::new(n);
    solve_iterative_with(n, &mut stats)
}

/// [`solve_iterative`] with an explicit statistics accumulator.
pub fn solve_iterative_with(n: usize, stats: &mut SearchStats) -> Option<Solution> {
    let start = Instant::now();
    let solution = search(n, stats);
    stats.elapsed += start.elapsed();

    match &solution {
        Some(solution) => {
            stats.solutions_found += 1;
            debug!(n, backtracks = stats.backtracks, %solution, "first solution found");
        }
        None => debug!(n, backtracks = stats.backtracks, "no solution"),
    }
    solution
}

fn search(n: usize, stats: &mut SearchStats) -> Option<Solution> {
    if n == 0 {
        return Some(Solution::empty());
    }

    let mut board = BoardState::new(n);
    // cursors[row] is the next column to try at that row; the top of the
    // stack is the row currently being extended.
    let mut cursors: CursorStack = SmallVec::new();
    cursors.push(0);

    loop {
        let row = cursors.len() - 1;
        let next = (cursors[row]..n).find(|&col| board.can_place(row, col));

        match next {
            Some(col) => {
                board.place(row, col);
                stats.nodes_visited += 1;
                // Resume one past this column if the branch below fails.
                cursors[row] = col + 1;
                if row + 1 == n {
                    return Some(Solution::new(board.columns_up_to(n)));
                }
                cursors.push(0);
            }
            None => {
                // Row exhausted: pop back and undo the previous row's queen.
                cursors.pop();
                let Some(prev) = cursors.len().checked_sub(1) else {
                    return None;
                };
                board.remove(prev);
                stats.backtracks += 1;
            }
        }
    }
}
