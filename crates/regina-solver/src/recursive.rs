//! Recursive first-solution search.

use std::time::Instant;

use regina_core::{BoardState, Solution};
use tracing::debug;

use crate::stats::SearchStats;

/// Finds the deterministic first solution for an `n`×`n` board.
///
/// Columns are tried in ascending order at every row, so the result is
/// the lexicographically smallest solution and identical on every call.
/// Returns `None` for the infeasible boards (n ∈ {2, 3}); the degenerate
/// 0×0 board yields the trivial empty solution.
///
/// # Example
///
/// ```
/// use regina_solver::solve_first;
///
/// assert_eq!(solve_first(4).unwrap().columns(), &[1, 3, 0, 2]);
/// assert!(solve_first(3).is_none());
/// ```
pub fn solve_first(n: usize) -> Option<Solution> {
    let mut stats = SearchStats::new(n);
    solve_first_with(n, &mut stats)
}

/// [`solve_first`] with an explicit statistics accumulator.
pub fn solve_first_with(n: usize, stats: &mut SearchStats) -> Option<Solution> {
    let start = Instant::now();
    let mut board = BoardState::new(n);
    let solved = search(&mut board, 0, stats);
    stats.elapsed += start.elapsed();

    if solved {
        stats.solutions_found += 1;
        let solution = Solution::new(board.columns_up_to(n));
        debug!(n, backtracks = stats.backtracks, %solution, "first solution found");
        Some(solution)
    } else {
        debug!(n, backtracks = stats.backtracks, "no solution");
        None
    }
}

/// Depth-first descent from `row`. On success the placements stay on the
/// board (the final board is the answer); on exhaustion every placement
/// tried at this row is undone before returning, which is the
/// backtracking step.
fn search(board: &mut BoardState, row: usize, stats: &mut SearchStats) -> bool {
    let n = board.n();
    if row == n {
        return true;
    }
    for col in 0..n {
        if board.can_place(row, col) {
            board.place(row, col);
            stats.nodes_visited += 1;
            if search(board, row + 1, stats) {
                return true;
            }
            board.remove(row);
            stats.backtracks += 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use regina_core::validate_solution;

    #[test]
    fn first_solutions_are_deterministic() {
        assert_eq!(solve_first(1).unwrap().columns(), &[0]);
        assert_eq!(solve_first(4).unwrap().columns(), &[1, 3, 0, 2]);
        assert_eq!(solve_first(5).unwrap().columns(), &[0, 2, 4, 1, 3]);
        assert_eq!(solve_first(6).unwrap().columns(), &[1, 3, 5, 0, 2, 4]);
        assert_eq!(solve_first(8), solve_first(8));
    }

    #[test]
    fn infeasible_boards_return_none() {
        assert!(solve_first(2).is_none());
        assert!(solve_first(3).is_none());
    }

    #[test]
    fn degenerate_board_has_trivial_solution() {
        assert_eq!(solve_first(0), Some(Solution::empty()));
    }

    #[test]
    fn solutions_validate() {
        for n in [1, 4, 5, 6, 7, 8, 9, 10] {
            let solution = solve_first(n).unwrap();
            assert!(validate_solution(&solution), "n = {n}");
        }
    }

    #[test]
    fn stats_record_the_search() {
        let mut stats = SearchStats::new(6);
        let solution = solve_first_with(6, &mut stats);
        assert!(solution.is_some());
        assert_eq!(stats.solutions_found, 1);
        assert!(stats.nodes_visited >= 6);
        // Every backtrack undoes a prior placement.
        assert!(stats.backtracks < stats.nodes_visited);
    }
}
