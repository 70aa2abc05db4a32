//! Benchmark runner.

use rayon::prelude::*;
use regina_config::Algorithm;
use regina_core::Result;
use regina_solver::run_algorithm;
use tracing::info;

use crate::config::BenchmarkConfig;
use crate::result::BenchmarkResult;

/// Runs the configured `(board size, algorithm)` grid.
///
/// Each cell runs the solver once on a board it alone owns, so cells are
/// independent and execute on the rayon pool when the configuration asks
/// for parallelism. Per-run backtrack counts are aggregated unmodified,
/// and results come back sorted by `(n, algorithm)` — parallel execution
/// never changes the observable order.
///
/// This harness measures; it does not judge correctness. Cross-verifying
/// solver output is the validator's job.
///
/// # Example
///
/// ```
/// use regina_benchmark::{run_benchmark, BenchmarkConfig};
///
/// let config = BenchmarkConfig::new("smoke").with_board_range(4, 5);
/// let results = run_benchmark(&config).unwrap();
/// assert_eq!(results.len(), 6); // 2 board sizes x 3 algorithms
/// ```
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<Vec<BenchmarkResult>> {
    config.validate()?;

    let (min_board, max_board) = config.board_range();
    let cells: Vec<(usize, Algorithm)> = (min_board..=max_board)
        .flat_map(|n| config.algorithms().iter().map(move |&algorithm| (n, algorithm)))
        .collect();

    info!(
        name = config.name(),
        cells = cells.len(),
        parallel = config.is_parallel(),
        "running benchmark grid"
    );

    let run_cell = |&(n, algorithm): &(usize, Algorithm)| {
        let result = BenchmarkResult::from_run(n, run_algorithm(algorithm, n, config.budget()));
        info!(
            n,
            algorithm = %algorithm,
            solutions = result.solution_count,
            backtracks = result.backtracks,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "benchmark run complete"
        );
        result
    };

    let mut results: Vec<BenchmarkResult> = if config.is_parallel() {
        cells.par_iter().map(run_cell).collect()
    } else {
        cells.iter().map(run_cell).collect()
    };
    results.sort_by_key(|r| (r.n, r.algorithm));
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regina_core::known_solution_count;
    use regina_solver::SearchBudget;

    #[test]
    fn grid_is_complete_and_sorted() {
        let config = BenchmarkConfig::new("test").with_board_range(4, 6);
        let results = run_benchmark(&config).unwrap();
        assert_eq!(results.len(), 9);

        let keys: Vec<(usize, Algorithm)> = results.iter().map(|r| (r.n, r.algorithm)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn parallel_and_sequential_agree_on_counts() {
        let parallel = run_benchmark(&BenchmarkConfig::new("par").with_board_range(4, 7)).unwrap();
        let sequential =
            run_benchmark(&BenchmarkConfig::new("seq").with_board_range(4, 7).sequential())
                .unwrap();

        for (a, b) in parallel.iter().zip(&sequential) {
            assert_eq!((a.n, a.algorithm), (b.n, b.algorithm));
            assert_eq!(a.solution_count, b.solution_count);
            assert_eq!(a.backtracks, b.backtracks);
        }
    }

    #[test]
    fn enumeration_counts_match_known_sequence() {
        let config = BenchmarkConfig::new("counts")
            .with_board_range(4, 8)
            .with_algorithms([Algorithm::Enumerating]);
        for result in run_benchmark(&config).unwrap() {
            assert!(result.completed);
            assert_eq!(
                result.solution_count,
                known_solution_count(result.n).unwrap(),
                "n = {}",
                result.n
            );
        }
    }

    #[test]
    fn budget_truncation_is_visible_per_run() {
        let config = BenchmarkConfig::new("budget")
            .with_board_range(9, 9)
            .with_algorithms([Algorithm::Enumerating])
            .with_budget(SearchBudget::unbounded().with_solution_limit(3).unwrap());
        let results = run_benchmark(&config).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].solution_count, 3);
        assert!(!results[0].completed);
    }

    #[test]
    fn invalid_grid_is_rejected_before_running() {
        let config = BenchmarkConfig::new("bad").with_algorithms([]);
        assert!(run_benchmark(&config).is_err());
    }
}
