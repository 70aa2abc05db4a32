//! Board state and incremental conflict tracking.
//!
//! The solvers mutate a single [`BoardState`] in place while walking the
//! search tree, so feasibility checks must be O(1). [`ConflictTracker`]
//! keeps occupancy for the three attack axes — columns, rising diagonals
//! (keyed by `row - col`) and falling diagonals (keyed by `row + col`) —
//! and is the sole source of truth for whether a square is safe. There is
//! no O(N) rescan anywhere on the search path.

/// O(1) feasibility check for queen placement.
///
/// Occupancy is stored as dense boolean vectors rather than hash sets:
/// the key universes are tiny (`N` columns, `2N - 1` diagonals each way)
/// and fully known up front. Rising-diagonal keys `row - col` span
/// `-(N-1)..=N-1` and are offset by `N - 1` to index into the vector.
///
/// # Example
///
/// ```
/// use regina_core::ConflictTracker;
///
/// let mut tracker = ConflictTracker::new(4);
/// assert!(tracker.is_safe(0, 1));
/// tracker.occupy(0, 1);
/// assert!(!tracker.is_safe(1, 1)); // same column
/// assert!(!tracker.is_safe(1, 2)); // same rising diagonal
/// assert!(!tracker.is_safe(1, 0)); // same falling diagonal
/// assert!(tracker.is_safe(1, 3));
/// ```
#[derive(Debug, Clone)]
pub struct ConflictTracker {
    n: usize,
    columns: Vec<bool>,
    /// Rising diagonals, `row - col`, offset by `n - 1`.
    diag_rising: Vec<bool>,
    /// Falling diagonals, `row + col`.
    diag_falling: Vec<bool>,
}

impl ConflictTracker {
    /// Creates an empty tracker for an `n`×`n` board.
    pub fn new(n: usize) -> Self {
        let diagonals = if n == 0 { 0 } else { 2 * n - 1 };
        Self {
            n,
            columns: vec![false; n],
            diag_rising: vec![false; diagonals],
            diag_falling: vec![false; diagonals],
        }
    }

    #[inline]
    fn rising_index(&self, row: usize, col: usize) -> usize {
        row + self.n - 1 - col
    }

    #[inline]
    fn falling_index(&self, row: usize, col: usize) -> usize {
        row + col
    }

    /// Returns true iff no occupied column or diagonal attacks `(row, col)`.
    #[inline]
    pub fn is_safe(&self, row: usize, col: usize) -> bool {
        !self.columns[col]
            && !self.diag_rising[self.rising_index(row, col)]
            && !self.diag_falling[self.falling_index(row, col)]
    }

    /// Marks the column and both diagonals through `(row, col)` as occupied.
    ///
    /// Precondition: `is_safe(row, col)`. Violating it is a programming
    /// error in the caller, not a recoverable condition.
    #[inline]
    pub fn occupy(&mut self, row: usize, col: usize) {
        debug_assert!(self.is_safe(row, col), "occupy() on attacked square");
        self.columns[col] = true;
        let rising = self.rising_index(row, col);
        self.diag_rising[rising] = true;
        let falling = self.falling_index(row, col);
        self.diag_falling[falling] = true;
    }

    /// Reverses [`occupy`](Self::occupy) for `(row, col)`.
    #[inline]
    pub fn release(&mut self, row: usize, col: usize) {
        debug_assert!(self.columns[col], "release() on empty column");
        self.columns[col] = false;
        let rising = self.rising_index(row, col);
        self.diag_rising[rising] = false;
        let falling = self.falling_index(row, col);
        self.diag_falling[falling] = false;
    }
}

/// Mutable per-row queen placement for a single search.
///
/// One queen per row; `placement[row]` is the occupied column, or `None`
/// for rows at or beyond the current search depth. All mutation goes
/// through [`place`](Self::place) / [`remove`](Self::remove) so the owned
/// [`ConflictTracker`] never disagrees with the row record.
///
/// A `BoardState` is created empty per search invocation and is never
/// shared across searches.
#[derive(Debug, Clone)]
pub struct BoardState {
    n: usize,
    placement: Vec<Option<usize>>,
    tracker: ConflictTracker,
}

impl BoardState {
    /// Creates an empty `n`×`n` board.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            placement: vec![None; n],
            tracker: ConflictTracker::new(n),
        }
    }

    /// Board size.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns true iff a queen at `(row, col)` would attack no placed queen.
    #[inline]
    pub fn can_place(&self, row: usize, col: usize) -> bool {
        self.tracker.is_safe(row, col)
    }

    /// Places a queen at `(row, col)`.
    ///
    /// Precondition: `can_place(row, col)` holds and `row` is unoccupied.
    #[inline]
    pub fn place(&mut self, row: usize, col: usize) {
        debug_assert!(self.placement[row].is_none(), "place() on occupied row");
        self.tracker.occupy(row, col);
        self.placement[row] = Some(col);
    }

    /// Removes the queen previously placed at `row` and returns its column.
    ///
    /// Calling this on an unplaced row is a programming-logic fault and
    /// panics.
    #[inline]
    pub fn remove(&mut self, row: usize) -> usize {
        let col = self.placement[row]
            .take()
            .unwrap_or_else(|| panic!("remove() on unplaced row {row}"));
        self.tracker.release(row, col);
        col
    }

    /// Column of the queen at `row`, if one is placed.
    #[inline]
    pub fn column_at(&self, row: usize) -> Option<usize> {
        self.placement[row]
    }

    /// Snapshot of the placed columns for rows `0..depth`.
    ///
    /// Precondition: every row below `depth` holds a queen.
    pub fn columns_up_to(&self, depth: usize) -> Vec<usize> {
        self.placement[..depth]
            .iter()
            .map(|col| col.expect("gap in placement below search depth"))
            .collect()
    }
}
