//! Full enumeration of solutions.

use std::ops::ControlFlow;
use std::time::Instant;

use regina_core::{BoardState, Solution};
use tracing::debug;

use crate::budget::{ArmedBudget, SearchBudget};
use crate::stats::SearchStats;

/// Outcome of an enumeration run.
///
/// `completed` is false when a solution-count cap or deadline stopped the
/// search early; the solutions gathered so far are still valid and in the
/// deterministic enumeration order. Hitting a cap always means the rest
/// of the tree went unexplored, so a capped run is incomplete even when
/// the cap happens to equal the total solution count.
#[derive(Debug, Clone)]
pub struct Enumeration {
    /// Solutions in ascending-column, row-major discovery order.
    pub solutions: Vec<Solution>,
    /// True iff the whole search tree was explored.
    pub completed: bool,
    /// Search statistics for this run.
    pub stats: SearchStats,
}

/// Enumerates all solutions for an `n`×`n` board, within `budget`.
///
/// Same traversal as the first-solution search, but a complete board is
/// recorded and then treated as a dead end so the search keeps exploring.
/// The budget is checked at each row transition, so an in-progress
/// enumeration stops promptly instead of blocking indefinitely.
///
/// # Example
///
/// ```
/// use regina_solver::{solve_all, SearchBudget};
///
/// let full = solve_all(6, &SearchBudget::unbounded());
/// assert_eq!(full.solutions.len(), 4);
/// assert!(full.completed);
///
/// let budget = SearchBudget::unbounded().with_solution_limit(2).unwrap();
/// let partial = solve_all(6, &budget);
/// assert_eq!(partial.solutions.len(), 2);
/// assert!(!partial.completed);
/// ```
pub fn solve_all(n: usize, budget: &SearchBudget) -> Enumeration {
    let start = Instant::now();
    let mut run = EnumerationRun {
        board: BoardState::new(n),
        budget: budget.start(),
        solutions: Vec::new(),
        stats: SearchStats::new(n),
    };
    let completed = run.search(0).is_continue();
    run.stats.elapsed = start.elapsed();

    debug!(
        n,
        solutions = run.solutions.len(),
        backtracks = run.stats.backtracks,
        completed,
        "enumeration finished"
    );
    Enumeration {
        solutions: run.solutions,
        completed,
        stats: run.stats,
    }
}

struct EnumerationRun {
    board: BoardState,
    budget: ArmedBudget,
    solutions: Vec<Solution>,
    stats: SearchStats,
}

impl EnumerationRun {
    /// Depth-first descent from `row`; `Break` aborts the whole search.
    fn search(&mut self, row: usize) -> ControlFlow<()> {
        if self.budget.is_exhausted(self.solutions.len()) {
            return ControlFlow::Break(());
        }
        let n = self.board.n();
        if row == n {
            self.stats.solutions_found += 1;
            self.solutions.push(Solution::new(self.board.columns_up_to(n)));
            // A recorded solution is a dead end for the traversal: fall
            // back to the caller so remaining branches are explored.
            return ControlFlow::Continue(());
        }
        for col in 0..n {
            if self.board.can_place(row, col) {
                self.board.place(row, col);
                self.stats.nodes_visited += 1;
                let flow = self.search(row + 1);
                self.board.remove(row);
                if flow.is_break() {
                    // Unwinding after an early stop is teardown, not
                    // backtracking; the count stays search-only.
                    return flow;
                }
                self.stats.backtracks += 1;
            }
        }
        ControlFlow::Continue(())
    }
}
