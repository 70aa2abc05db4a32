//! Symmetry classification of solution sets.
//!
//! The dihedral group of the square has 8 elements; two solutions are
//! equivalent when one is an image of the other under any of them. Each
//! equivalence class (orbit) is identified by a canonical representative:
//! the lexicographically smallest of a solution's 8 images. The transforms
//! are a fixed data table applied through one function, not 8 hand-written
//! special cases, so a coordinate bug cannot affect only one symmetry.

use indexmap::IndexMap;

use crate::solution::Solution;

/// One of the 8 symmetries of the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareSymmetry {
    Identity,
    /// Clockwise quarter turn.
    Rotate90,
    Rotate180,
    Rotate270,
    /// Mirror left-right (columns reversed).
    FlipHorizontal,
    /// Mirror top-bottom (rows reversed).
    FlipVertical,
    /// Transpose across the main diagonal.
    FlipDiagonal,
    /// Transpose across the anti-diagonal.
    FlipAntiDiagonal,
}

impl SquareSymmetry {
    /// All 8 symmetries, identity first.
    pub const ALL: [SquareSymmetry; 8] = [
        SquareSymmetry::Identity,
        SquareSymmetry::Rotate90,
        SquareSymmetry::Rotate180,
        SquareSymmetry::Rotate270,
        SquareSymmetry::FlipHorizontal,
        SquareSymmetry::FlipVertical,
        SquareSymmetry::FlipDiagonal,
        SquareSymmetry::FlipAntiDiagonal,
    ];

    /// Maps a cell of an `n`×`n` board to its image cell.
    #[inline]
    pub fn apply_cell(self, n: usize, row: usize, col: usize) -> (usize, usize) {
        let m = n - 1;
        match self {
            SquareSymmetry::Identity => (row, col),
            SquareSymmetry::Rotate90 => (col, m - row),
            SquareSymmetry::Rotate180 => (m - row, m - col),
            SquareSymmetry::Rotate270 => (m - col, row),
            SquareSymmetry::FlipHorizontal => (row, m - col),
            SquareSymmetry::FlipVertical => (m - row, col),
            SquareSymmetry::FlipDiagonal => (col, row),
            SquareSymmetry::FlipAntiDiagonal => (m - col, m - row),
        }
    }

    /// Image of a whole solution.
    ///
    /// Every symmetry maps a non-attacking placement to a non-attacking
    /// placement, so the image again has exactly one queen per row.
    pub fn apply(self, solution: &Solution) -> Solution {
        let n = solution.n();
        if n == 0 {
            return Solution::empty();
        }
        let mut columns = vec![0usize; n];
        for (row, col) in solution.coordinates() {
            let (image_row, image_col) = self.apply_cell(n, row, col);
            columns[image_row] = image_col;
        }
        Solution::new(columns)
    }
}

/// The distinct images of `solution` under all 8 symmetries.
///
/// The result length is the orbit size: 1, 2, 4 or 8.
pub fn orbit(solution: &Solution) -> Vec<Solution> {
    let mut images: Vec<Solution> = SquareSymmetry::ALL
        .iter()
        .map(|sym| sym.apply(solution))
        .collect();
    images.sort();
    images.dedup();
    images
}

/// Canonical representative of a solution's equivalence class: the
/// lexicographically smallest of its 8 images.
pub fn canonical(solution: &Solution) -> Solution {
    SquareSymmetry::ALL
        .iter()
        .map(|sym| sym.apply(solution))
        .min()
        .unwrap_or_else(Solution::empty)
}

/// Groups `solutions` into symmetry equivalence classes.
///
/// Returns canonical representative → orbit size, in first-seen order.
/// The number of entries is the count of fundamental solutions. Orbit
/// size is derived from the transform images themselves, so the grouping
/// never double-counts: two solutions land in the same class exactly when
/// one's image set contains the other.
///
/// # Example
///
/// ```
/// use regina_core::{analyze_symmetry, Solution};
///
/// let solutions = vec![
///     Solution::new(vec![1, 3, 0, 2]),
///     Solution::new(vec![2, 0, 3, 1]),
/// ];
/// let classes = analyze_symmetry(&solutions);
/// assert_eq!(classes.len(), 1); // one fundamental 4-queens solution
/// assert_eq!(classes[&Solution::new(vec![1, 3, 0, 2])], 2);
/// ```
pub fn analyze_symmetry(solutions: &[Solution]) -> IndexMap<Solution, usize> {
    let mut classes: IndexMap<Solution, usize> = IndexMap::new();
    for solution in solutions {
        let representative = canonical(solution);
        classes
            .entry(representative)
            .or_insert_with(|| orbit(solution).len());
    }
    classes
}
