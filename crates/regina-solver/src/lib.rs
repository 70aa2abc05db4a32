//! Backtracking search strategies for the regina N-Queens engine.
//!
//! Three solvers share one traversal contract — rows top to bottom,
//! columns ascending, O(1) conflict checks through the board's tracker:
//!
//! - [`solve_first`]: recursive depth-first search, stops at the first
//!   solution.
//! - [`solve_iterative`]: explicit-stack equivalent of [`solve_first`],
//!   bit-for-bit the same result for every board size.
//! - [`solve_all`]: enumerates every solution, optionally bounded by a
//!   [`SearchBudget`] (solution cap and/or deadline).
//!
//! Each invocation constructs its own board and returns its statistics
//! in an explicit [`SearchStats`] accumulator; nothing is shared between
//! runs.

mod budget;
mod enumerate;
mod iterative;
mod recursive;
mod stats;

pub use budget::SearchBudget;
pub use enumerate::{solve_all, Enumeration};
pub use iterative::{solve_iterative, solve_iterative_with};
pub use recursive::{solve_first, solve_first_with};
pub use regina_config::Algorithm;
pub use stats::SearchStats;

/// Outcome of running one named strategy once, for the benchmark harness.
#[derive(Debug, Clone)]
pub struct AlgorithmRun {
    /// Strategy that produced this run.
    pub algorithm: Algorithm,
    /// Solutions found (0 or 1 for the first-solution strategies).
    pub solution_count: u64,
    /// False iff a budget stopped an enumeration early.
    pub completed: bool,
    /// Statistics of the run.
    pub stats: SearchStats,
}

/// Runs `algorithm` once on a fresh board.
///
/// The budget applies to the enumerating strategy only; the
/// first-solution strategies are bounded by construction.
pub fn run_algorithm(algorithm: Algorithm, n: usize, budget: &SearchBudget) -> AlgorithmRun {
    match algorithm {
        Algorithm::Recursive => {
            let mut stats = SearchStats::new(n);
            let solution = solve_first_with(n, &mut stats);
            AlgorithmRun {
                algorithm,
                solution_count: solution.is_some() as u64,
                completed: true,
                stats,
            }
        }
        Algorithm::Iterative => {
            let mut stats = SearchStats::new(n);
            let solution = solve_iterative_with(n, &mut stats);
            AlgorithmRun {
                algorithm,
                solution_count: solution.is_some() as u64,
                completed: true,
                stats,
            }
        }
        Algorithm::Enumerating => {
            let result = solve_all(n, budget);
            AlgorithmRun {
                algorithm,
                solution_count: result.solutions.len() as u64,
                completed: result.completed,
                stats: result.stats,
            }
        }
    }
}
