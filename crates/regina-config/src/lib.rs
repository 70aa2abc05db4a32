//! Configuration system for regina.
//!
//! Load search and benchmark settings from TOML files to control
//! enumeration limits and benchmark grids without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use regina_config::{Algorithm, SearchConfig};
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     solution_limit = 100
//!     time_limit_ms = 2000
//!
//!     [benchmark]
//!     min_board = 4
//!     max_board = 8
//!     algorithms = ["recursive", "iterative", "enumerating"]
//! "#).unwrap();
//!
//! assert_eq!(config.solution_limit, Some(100));
//! let bench = config.benchmark.as_ref().unwrap();
//! assert_eq!(bench.algorithms, Algorithm::ALL);
//! ```
//!
//! Use default config when the file is missing:
//!
//! ```
//! use regina_config::SearchConfig;
//!
//! let config = SearchConfig::load("search.toml").unwrap_or_default();
//! // Proceeds with defaults (unbounded search) if the file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Identifier of a search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Depth-first search that stops at the first solution.
    Recursive,
    /// Explicit-stack equivalent of `Recursive`.
    Iterative,
    /// Depth-first search that collects every solution.
    Enumerating,
}

impl Algorithm {
    /// All strategies, in canonical order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Recursive,
        Algorithm::Iterative,
        Algorithm::Enumerating,
    ];

    /// Stable identifier used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Recursive => "recursive",
            Algorithm::Iterative => "iterative",
            Algorithm::Enumerating => "enumerating",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Main search configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Stop enumeration after this many solutions. Must be positive.
    #[serde(default)]
    pub solution_limit: Option<usize>,

    /// Stop enumeration after this many milliseconds. Must be positive.
    #[serde(default)]
    pub time_limit_ms: Option<u64>,

    /// Benchmark grid, if benchmarking is configured.
    #[serde(default)]
    pub benchmark: Option<BenchmarkSection>,
}

/// Benchmark grid configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BenchmarkSection {
    /// Smallest board size to run (inclusive).
    pub min_board: usize,
    /// Largest board size to run (inclusive).
    pub max_board: usize,
    /// Strategies to benchmark; defaults to all of them.
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<Algorithm>,
}

fn default_algorithms() -> Vec<Algorithm> {
    Algorithm::ALL.to_vec()
}

impl SearchConfig {
    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// The configured time limit as a [`Duration`].
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    /// Fails fast on configurations that would silently do nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.solution_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "solution_limit must be positive".into(),
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err(ConfigError::Invalid("time_limit_ms must be positive".into()));
        }
        if let Some(bench) = &self.benchmark {
            if bench.min_board > bench.max_board {
                return Err(ConfigError::Invalid(format!(
                    "benchmark board range is empty: {}..={}",
                    bench.min_board, bench.max_board
                )));
            }
            if bench.algorithms.is_empty() {
                return Err(ConfigError::Invalid(
                    "benchmark.algorithms must not be empty".into(),
                ));
            }
        }
        Ok(())
    }
}
