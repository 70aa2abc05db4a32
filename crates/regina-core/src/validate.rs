//! Independent solution validation.
//!
//! The validator shares no state with any solver: it recomputes the
//! column and diagonal occupancy from scratch, so it can cross-verify
//! solver output as well as externally supplied candidates.

use crate::solution::Solution;

/// Returns true iff `candidate` is a conflict-free placement for an
/// `n`×`n` board.
///
/// This is a predicate, not a parser: malformed input — wrong length,
/// column values outside `[0, n)` — yields `false`, never an error.
///
/// # Example
///
/// ```
/// use regina_core::validate;
///
/// assert!(validate(4, &[1, 3, 0, 2]));
/// assert!(!validate(4, &[1, 3, 0]));       // wrong length
/// assert!(!validate(4, &[0, 0, 1, 2]));    // column clash
/// assert!(!validate(4, &[0, 1, 2, 3]));    // diagonal clash
/// assert!(validate(0, &[]));               // trivial empty board
/// ```
pub fn validate(n: usize, candidate: &[usize]) -> bool {
    if candidate.len() != n {
        return false;
    }
    let diagonals = if n == 0 { 0 } else { 2 * n - 1 };
    let mut columns = vec![false; n];
    let mut diag_rising = vec![false; diagonals];
    let mut diag_falling = vec![false; diagonals];

    for (row, &col) in candidate.iter().enumerate() {
        if col >= n {
            return false;
        }
        let rising = row + n - 1 - col;
        let falling = row + col;
        if columns[col] || diag_rising[rising] || diag_falling[falling] {
            return false;
        }
        columns[col] = true;
        diag_rising[rising] = true;
        diag_falling[falling] = true;
    }
    true
}

/// [`validate`] over a [`Solution`] value, sized by the solution itself.
pub fn validate_solution(solution: &Solution) -> bool {
    validate(solution.n(), solution.columns())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_solutions() {
        assert!(validate(4, &[1, 3, 0, 2]));
        assert!(validate(4, &[2, 0, 3, 1]));
        assert!(validate(5, &[0, 2, 4, 1, 3]));
        assert!(validate(1, &[0]));
    }

    #[test]
    fn rejects_conflicts() {
        // Column reuse.
        assert!(!validate(4, &[1, 1, 0, 2]));
        // Rising diagonal: (0,2) and (1,3) share row - col.
        assert!(!validate(4, &[2, 3, 1, 0]));
        // Falling diagonal: (0,3) and (1,2) share row + col.
        assert!(!validate(4, &[3, 2, 0, 1]));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(!validate(4, &[]));
        assert!(!validate(4, &[1, 3, 0, 2, 4]));
        assert!(!validate(4, &[1, 3, 0, 9]));
        assert!(!validate(0, &[0]));
    }

    #[test]
    fn is_idempotent() {
        let candidate = [1usize, 3, 0, 2];
        assert_eq!(validate(4, &candidate), validate(4, &candidate));
        let bad = [0usize, 0, 0, 0];
        assert_eq!(validate(4, &bad), validate(4, &bad));
    }
}
