//! Benchmark result types.

use std::time::Duration;

use regina_config::Algorithm;
use regina_solver::AlgorithmRun;
use serde::Serialize;

/// Result of a single `(board size, algorithm)` run.
///
/// Immutable once produced; the runner aggregates these without merging
/// or adjusting per-run counts.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    /// Board size of the run.
    pub n: usize,
    /// Strategy that was run.
    pub algorithm: Algorithm,
    /// Solutions found.
    pub solution_count: u64,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
    /// Placements undone during the search.
    pub backtracks: u64,
    /// False iff a budget truncated an enumeration.
    pub completed: bool,
}

impl BenchmarkResult {
    /// Builds a result from one solver run.
    pub fn from_run(n: usize, run: AlgorithmRun) -> Self {
        Self {
            n,
            algorithm: run.algorithm,
            solution_count: run.solution_count,
            elapsed: run.stats.elapsed,
            backtracks: run.stats.backtracks,
            completed: run.completed,
        }
    }

    /// Solutions per second, 0 for instantaneous runs.
    pub fn solutions_per_second(&self) -> f64 {
        if self.elapsed.is_zero() {
            0.0
        } else {
            self.solution_count as f64 / self.elapsed.as_secs_f64()
        }
    }
}
