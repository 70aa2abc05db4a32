//! Benchmark configuration.

use regina_config::{Algorithm, BenchmarkSection, SearchConfig};
use regina_core::{ReginaError, Result};
use regina_solver::SearchBudget;

/// Configuration for a benchmark grid.
///
/// A grid is the cross product of an inclusive board-size range and a
/// set of strategies; each cell is run once on a fresh board.
///
/// # Example
///
/// ```
/// use regina_benchmark::BenchmarkConfig;
/// use regina_config::Algorithm;
///
/// let config = BenchmarkConfig::new("nightly")
///     .with_board_range(4, 9)
///     .with_algorithms([Algorithm::Recursive, Algorithm::Enumerating]);
///
/// assert_eq!(config.name(), "nightly");
/// assert_eq!(config.board_range(), (4, 9));
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    name: String,
    min_board: usize,
    max_board: usize,
    algorithms: Vec<Algorithm>,
    budget: SearchBudget,
    parallel: bool,
}

impl BenchmarkConfig {
    /// Creates a configuration with the default grid: boards 4..=8,
    /// every strategy, unbounded enumeration, parallel execution.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_board: 4,
            max_board: 8,
            algorithms: Algorithm::ALL.to_vec(),
            budget: SearchBudget::unbounded(),
            parallel: true,
        }
    }

    /// Sets the inclusive board-size range.
    pub fn with_board_range(mut self, min_board: usize, max_board: usize) -> Self {
        self.min_board = min_board;
        self.max_board = max_board;
        self
    }

    /// Sets the strategies to run.
    pub fn with_algorithms(mut self, algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        self.algorithms = algorithms.into_iter().collect();
        self
    }

    /// Bounds the enumerating strategy's runs.
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Runs the grid on the current thread instead of the rayon pool.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Builds a configuration from a loaded [`SearchConfig`] with a
    /// `[benchmark]` section.
    pub fn from_search_config(name: impl Into<String>, config: &SearchConfig) -> Result<Self> {
        let BenchmarkSection {
            min_board,
            max_board,
            algorithms,
        } = config
            .benchmark
            .as_ref()
            .ok_or_else(|| ReginaError::Config("missing [benchmark] section".into()))?;
        let budget = SearchBudget::from_config(config)?;
        Ok(Self::new(name)
            .with_board_range(*min_board, *max_board)
            .with_algorithms(algorithms.iter().copied())
            .with_budget(budget))
    }

    /// Benchmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The inclusive `(min, max)` board-size range.
    pub fn board_range(&self) -> (usize, usize) {
        (self.min_board, self.max_board)
    }

    /// Strategies in the grid.
    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    /// Budget applied to enumerating runs.
    pub fn budget(&self) -> &SearchBudget {
        &self.budget
    }

    /// Whether the grid runs on the rayon pool.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Fails fast on grids that would silently run nothing.
    pub fn validate(&self) -> Result<()> {
        if self.min_board > self.max_board {
            return Err(ReginaError::Config(format!(
                "board range is empty: {}..={}",
                self.min_board, self.max_board
            )));
        }
        if self.algorithms.is_empty() {
            return Err(ReginaError::Config("no algorithms selected".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_full_grid() {
        let config = BenchmarkConfig::new("default");
        assert_eq!(config.board_range(), (4, 8));
        assert_eq!(config.algorithms(), Algorithm::ALL);
        assert!(config.is_parallel());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_grids_fail_validation() {
        let inverted = BenchmarkConfig::new("bad").with_board_range(9, 4);
        assert!(matches!(inverted.validate(), Err(ReginaError::Config(_))));

        let no_algorithms = BenchmarkConfig::new("bad").with_algorithms([]);
        assert!(matches!(
            no_algorithms.validate(),
            Err(ReginaError::Config(_))
        ));
    }

    #[test]
    fn from_search_config_requires_benchmark_section() {
        let config = SearchConfig::default();
        assert!(BenchmarkConfig::from_search_config("x", &config).is_err());

        let config = SearchConfig::from_toml_str(
            r#"
            solution_limit = 50

            [benchmark]
            min_board = 5
            max_board = 7
            algorithms = ["iterative"]
            "#,
        )
        .unwrap();
        let bench = BenchmarkConfig::from_search_config("x", &config).unwrap();
        assert_eq!(bench.board_range(), (5, 7));
        assert_eq!(bench.algorithms(), [Algorithm::Iterative]);
        assert_eq!(bench.budget().solution_limit(), Some(50));
    }
}
