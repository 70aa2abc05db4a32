//! Benchmarking harness for the regina N-Queens engine.
//!
//! Drives the competing search strategies across a range of board sizes
//! and records timing and backtrack counts per run. Independent cells of
//! the `(board size, algorithm)` grid run in parallel on the rayon pool;
//! each run owns a fresh board, and the harness never mutates shared
//! state between runs.
//!
//! # Example
//!
//! ```
//! use regina_benchmark::{run_benchmark, BenchmarkConfig, MarkdownReport};
//!
//! let config = BenchmarkConfig::new("readme").with_board_range(4, 6);
//! let results = run_benchmark(&config).unwrap();
//! let report = MarkdownReport::to_string(config.name(), &results);
//! assert!(report.contains("| Algorithm |"));
//! ```

mod config;
mod report;
mod result;
mod runner;

pub use config::BenchmarkConfig;
pub use report::{CsvExporter, MarkdownReport};
pub use result::BenchmarkResult;
pub use runner::run_benchmark;
