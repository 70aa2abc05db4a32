//! Core board model for the regina N-Queens engine.
//!
//! This crate holds everything the search strategies share but does not
//! itself search: the mutable [`BoardState`] with its O(1)
//! [`ConflictTracker`], immutable [`Solution`] values, the independent
//! [`validate`] predicate, and symmetry classification of solution sets.
//!
//! Data flows one way: solvers (in `regina-solver`) mutate a `BoardState`
//! in place and emit `Solution` values; validation and symmetry analysis
//! consume only those immutable values.

mod board;
mod error;
mod solution;
mod symmetry;
mod validate;

pub use board::{BoardState, ConflictTracker};
pub use error::{ReginaError, Result};
pub use solution::{known_solution_count, Solution};
pub use symmetry::{analyze_symmetry, canonical, orbit, SquareSymmetry};
pub use validate::{validate, validate_solution};
