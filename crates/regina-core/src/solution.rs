//! Immutable solution values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A complete non-attacking placement: one column index per row, 0-indexed.
///
/// Solutions are value types, produced only from a board that reached full
/// depth with all invariants holding; they never alias the `BoardState`
/// that produced them. Ordering is lexicographic over the column sequence,
/// which is what symmetry canonicalization relies on.
///
/// # Example
///
/// ```
/// use regina_core::Solution;
///
/// let solution = Solution::new(vec![1, 3, 0, 2]);
/// assert_eq!(solution.n(), 4);
/// assert_eq!(solution.columns(), &[1, 3, 0, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Solution(Vec<usize>);

impl Solution {
    /// Wraps an ordered column sequence.
    pub fn new(columns: Vec<usize>) -> Self {
        Self(columns)
    }

    /// The trivial solution for the degenerate 0×0 board.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Board size this solution is for.
    #[inline]
    pub fn n(&self) -> usize {
        self.0.len()
    }

    /// The column occupied in each row.
    #[inline]
    pub fn columns(&self) -> &[usize] {
        &self.0
    }

    /// Iterates `(row, col)` coordinates of all queens.
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (row, col) in self.0.iter().enumerate() {
            if row > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{col}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<usize>> for Solution {
    fn from(columns: Vec<usize>) -> Self {
        Self::new(columns)
    }
}

/// Known total solution counts for small boards.
///
/// Returns `None` for board sizes beyond the table. Used to sanity-check
/// full enumeration without re-deriving the sequence.
///
/// # Example
///
/// ```
/// use regina_core::known_solution_count;
///
/// assert_eq!(known_solution_count(8), Some(92));
/// assert_eq!(known_solution_count(3), Some(0));
/// assert_eq!(known_solution_count(40), None);
/// ```
pub fn known_solution_count(n: usize) -> Option<u64> {
    const COUNTS: [u64; 15] = [
        1, 1, 0, 0, 2, 10, 4, 40, 92, 352, 724, 2_680, 14_200, 73_712, 365_596,
    ];
    COUNTS.get(n).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_compact() {
        assert_eq!(Solution::new(vec![1, 3, 0, 2]).to_string(), "[1, 3, 0, 2]");
        assert_eq!(Solution::empty().to_string(), "[]");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = Solution::new(vec![0, 2, 4]);
        let b = Solution::new(vec![0, 3, 1]);
        assert!(a < b);
    }

    #[test]
    fn known_counts_table() {
        assert_eq!(known_solution_count(0), Some(1));
        assert_eq!(known_solution_count(2), Some(0));
        assert_eq!(known_solution_count(12), Some(14_200));
        assert_eq!(known_solution_count(14), Some(365_596));
        assert_eq!(known_solution_count(15), None);
    }
}
