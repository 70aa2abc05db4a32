//! End-to-end benchmark harness tests driven by loaded configuration.

use regina::prelude::*;
use regina::{CsvExporter, MarkdownReport};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("regina_benchmark=info")
        .with_test_writer()
        .try_init();
}

#[test]
fn benchmark_from_toml_config() {
    init_logging();

    let config = SearchConfig::from_toml_str(
        r#"
        [benchmark]
        min_board = 4
        max_board = 7
        algorithms = ["recursive", "iterative", "enumerating"]
        "#,
    )
    .unwrap();
    let bench = BenchmarkConfig::from_search_config("integration", &config).unwrap();
    let results = run_benchmark(&bench).unwrap();

    // 4 board sizes x 3 algorithms.
    assert_eq!(results.len(), 12);
    for result in &results {
        assert!(result.completed);
        if result.algorithm == Algorithm::Enumerating {
            assert_eq!(
                result.solution_count,
                known_solution_count(result.n).unwrap()
            );
        }
    }

    // Recursive and iterative runs agree run for run.
    for pair in results.chunks(3) {
        let recursive = pair.iter().find(|r| r.algorithm == Algorithm::Recursive);
        let iterative = pair.iter().find(|r| r.algorithm == Algorithm::Iterative);
        let (recursive, iterative) = (recursive.unwrap(), iterative.unwrap());
        assert_eq!(recursive.solution_count, iterative.solution_count);
        assert_eq!(recursive.backtracks, iterative.backtracks);
    }
}

#[test]
fn reports_render_all_runs() {
    let bench = BenchmarkConfig::new("report").with_board_range(4, 5);
    let results = run_benchmark(&bench).unwrap();

    let csv = CsvExporter::to_string(&results);
    assert_eq!(csv.lines().count(), results.len() + 1);

    let markdown = MarkdownReport::to_string(bench.name(), &results);
    assert!(markdown.contains("# Benchmark: report"));
    for result in &results {
        assert!(markdown.contains(&format!("| {} | {} |", result.n, result.algorithm)));
    }
}

#[test]
fn budgeted_benchmark_marks_truncated_runs() {
    let config = SearchConfig::from_toml_str(
        r#"
        solution_limit = 2

        [benchmark]
        min_board = 8
        max_board = 8
        algorithms = ["enumerating"]
        "#,
    )
    .unwrap();
    let bench = BenchmarkConfig::from_search_config("budgeted", &config).unwrap();
    let results = run_benchmark(&bench).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].solution_count, 2);
    assert!(!results[0].completed);
}
