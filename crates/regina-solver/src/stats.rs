//! Search statistics collection.
//!
//! Counters live in an explicit accumulator passed into each solver
//! invocation and returned with the result — never in process-wide
//! mutable state.

use std::fmt;
use std::time::Duration;

/// Statistics for one search run.
///
/// A backtrack is one undone placement (one `remove` call); this single
/// definition applies to every solver, so their counts are directly
/// comparable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Board size searched.
    pub n: usize,
    /// Complete solutions reached.
    pub solutions_found: u64,
    /// Placements made (nodes of the search tree visited).
    pub nodes_visited: u64,
    /// Placements undone.
    pub backtracks: u64,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
}

impl SearchStats {
    /// Creates an empty accumulator for an `n`×`n` search.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} board: {} solutions, {} nodes, {} backtracks in {:.4}s",
            self.n,
            self.n,
            self.solutions_found,
            self.nodes_visited,
            self.backtracks,
            self.elapsed.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_summarizes_run() {
        let stats = SearchStats {
            n: 8,
            solutions_found: 92,
            nodes_visited: 2057,
            backtracks: 2057,
            elapsed: Duration::from_millis(1500),
        };
        assert_eq!(
            stats.to_string(),
            "8x8 board: 92 solutions, 2057 nodes, 2057 backtracks in 1.5000s"
        );
    }
}
