//! regina - an N-Queens constraint-satisfaction search engine.
//!
//! Places N non-attacking queens on an N×N board, enumerates solutions,
//! validates them, classifies them by symmetry, and benchmarks the
//! competing search strategies.
//!
//! # Example
//!
//! ```rust
//! use regina::prelude::*;
//!
//! let result = solve_all(8, &SearchBudget::unbounded());
//! assert_eq!(result.solutions.len(), 92);
//!
//! let classes = analyze_symmetry(&result.solutions);
//! assert_eq!(classes.len(), 12); // fundamental solutions
//! ```

pub use regina_benchmark::{
    run_benchmark, BenchmarkConfig, BenchmarkResult, CsvExporter, MarkdownReport,
};
pub use regina_config::{Algorithm, ConfigError, SearchConfig};
pub use regina_core::{
    analyze_symmetry, canonical, known_solution_count, orbit, validate, validate_solution,
    BoardState, ConflictTracker, ReginaError, Result, Solution, SquareSymmetry,
};
pub use regina_solver::{
    run_algorithm, solve_all, solve_first, solve_iterative, AlgorithmRun, Enumeration,
    SearchBudget, SearchStats,
};

/// Everything a caller typically needs.
pub mod prelude {
    pub use regina_benchmark::{run_benchmark, BenchmarkConfig, BenchmarkResult};
    pub use regina_config::{Algorithm, SearchConfig};
    pub use regina_core::{
        analyze_symmetry, known_solution_count, validate, validate_solution, Solution,
    };
    pub use regina_solver::{
        solve_all, solve_first, solve_iterative, Enumeration, SearchBudget, SearchStats,
    };
}
