//! Report generation for benchmark results.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::result::BenchmarkResult;

/// CSV exporter for benchmark results.
///
/// # Example
///
/// ```
/// use regina_benchmark::CsvExporter;
///
/// let csv = CsvExporter::to_string(&[]);
/// assert!(csv.starts_with("n,algorithm,solutions,elapsed_ms,backtracks,completed"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Renders results as CSV, one row per run.
    pub fn to_string(results: &[BenchmarkResult]) -> String {
        let mut output = String::new();

        writeln!(output, "n,algorithm,solutions,elapsed_ms,backtracks,completed")
            .expect("writing to String cannot fail");
        for result in results {
            writeln!(
                output,
                "{},{},{},{:.3},{},{}",
                result.n,
                result.algorithm,
                result.solution_count,
                result.elapsed.as_secs_f64() * 1000.0,
                result.backtracks,
                result.completed
            )
            .expect("writing to String cannot fail");
        }
        output
    }

    /// Writes the CSV rendering to a file.
    pub fn write_to_file(results: &[BenchmarkResult], path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(results))
    }
}

/// Markdown report for benchmark results.
///
/// Renders the performance table: board size, strategy, solution count,
/// elapsed time, backtracks.
pub struct MarkdownReport;

impl MarkdownReport {
    /// Renders results as a Markdown document.
    pub fn to_string(name: &str, results: &[BenchmarkResult]) -> String {
        let mut output = String::new();

        writeln!(output, "# Benchmark: {name}\n").expect("writing to String cannot fail");
        writeln!(output, "| N | Algorithm | Solutions | Time (ms) | Backtracks | Complete |")
            .expect("writing to String cannot fail");
        writeln!(output, "|---|-----------|-----------|-----------|------------|----------|")
            .expect("writing to String cannot fail");
        for result in results {
            writeln!(
                output,
                "| {} | {} | {} | {:.3} | {} | {} |",
                result.n,
                result.algorithm,
                result.solution_count,
                result.elapsed.as_secs_f64() * 1000.0,
                result.backtracks,
                if result.completed { "yes" } else { "no" }
            )
            .expect("writing to String cannot fail");
        }
        output
    }

    /// Writes the Markdown rendering to a file.
    pub fn write_to_file(
        name: &str,
        results: &[BenchmarkResult],
        path: impl AsRef<Path>,
    ) -> io::Result<()> {
        fs::write(path, Self::to_string(name, results))
    }
}
