//! DOK (dictionary-of-keys) sparse matrix storage
//!
//! Entries live in a hash map keyed by the composite `(row, col)`
//! coordinate. The map never holds a zero: `set` with zero removes the key
//! instead, so `nnz` is always exactly the number of non-zero cells.
//!
//! Storage is bounds-agnostic. Coordinates outside the declared extents are
//! representable; they simply fall outside every dense view of the matrix.
//! [`DokMatrix::out_of_bounds`] reports them for callers that want a
//! stricter contract.

use hashbrown::HashMap;

use sptx_core::{Entry, MatrixElement, SparseMatrix};

/// Sparse matrix stored as a map from `(row, col)` to its non-zero value
///
/// Dimensions are fixed at construction. Iteration order over entries is
/// the map's order and deliberately unspecified; equality comparison is
/// order-independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DokMatrix<T = i64> {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), T>,
}

impl<T: MatrixElement> DokMatrix<T> {
    /// Create an empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Build a matrix from declared dimensions and a sequence of entries
    ///
    /// Later entries overwrite earlier ones at the same coordinate, and
    /// zero-valued entries erase rather than store.
    pub fn from_entries(rows: usize, cols: usize, entries: impl IntoIterator<Item = Entry<T>>) -> Self {
        let mut matrix = Self::new(rows, cols);
        for entry in entries {
            matrix.set(entry.row, entry.col, entry.value);
        }
        matrix
    }

    /// Number of rows declared at construction
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns declared at construction
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value at `(row, col)`, or zero when the cell is empty
    ///
    /// Bounds-agnostic: querying outside the declared extents returns zero
    /// like any other empty cell.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.entries
            .get(&(row, col))
            .copied()
            .unwrap_or(T::ZERO)
    }

    /// Store `value` at `(row, col)`; zero removes any existing entry
    ///
    /// This is the sole mutation primitive. It maintains the sparsity
    /// invariant that the map never holds a zero.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Whether a non-zero value is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row, col))
    }

    /// Iterate over stored entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = Entry<T>> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| Entry::new(row, col, value))
    }

    /// Stored entries whose coordinates fall outside the declared extents
    ///
    /// Parsing accepts such entries (see the format contract); this is the
    /// diagnostic for callers that want to reject them.
    pub fn out_of_bounds(&self) -> impl Iterator<Item = Entry<T>> + '_ {
        self.iter()
            .filter(|entry| entry.row >= self.rows || entry.col >= self.cols)
    }

    /// Shape and occupancy summary for reporting
    pub fn summary(&self) -> MatrixSummary {
        MatrixSummary {
            rows: self.rows,
            cols: self.cols,
            nnz: self.nnz(),
            density: SparseMatrix::density(self),
        }
    }
}

impl<T: MatrixElement> SparseMatrix for DokMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.entries.get(&(row, col)).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }
}

/// Shape and occupancy diagnostics for one matrix
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixSummary {
    /// Declared row count
    pub rows: usize,
    /// Declared column count
    pub cols: usize,
    /// Stored non-zero entries
    pub nnz: usize,
    /// Fraction of cells holding a non-zero value
    pub density: f64,
}

impl std::fmt::Display for MatrixSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} matrix, {} non-zero ({:.2}% dense)",
            self.rows,
            self.cols,
            self.nnz,
            self.density * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_last_non_zero_set() {
        let mut m = DokMatrix::<i64>::new(3, 3);
        assert_eq!(m.get(1, 2), 0);

        m.set(1, 2, 5);
        assert_eq!(m.get(1, 2), 5);

        m.set(1, 2, -9);
        assert_eq!(m.get(1, 2), -9);
        assert_eq!(m.nnz(), 1);
    }

    #[test]
    fn set_zero_removes_the_entry() {
        let mut m = DokMatrix::<i64>::new(2, 2);
        m.set(0, 0, 7);
        assert!(m.contains(0, 0));

        m.set(0, 0, 0);
        assert!(!m.contains(0, 0));
        assert_eq!(m.get(0, 0), 0);
        assert!(m.is_empty());

        // removing an absent key is a no-op
        m.set(1, 1, 0);
        assert!(m.is_empty());
    }

    #[test]
    fn storage_is_bounds_agnostic() {
        let mut m = DokMatrix::<i64>::new(2, 2);
        m.set(10, 10, 3);
        assert_eq!(m.get(10, 10), 3);
        assert_eq!(m.nnz(), 1);

        let stray: Vec<_> = m.out_of_bounds().collect();
        assert_eq!(stray, vec![Entry::new(10, 10, 3)]);

        m.set(1, 1, 4);
        assert_eq!(m.out_of_bounds().count(), 1);
    }

    #[test]
    fn from_entries_last_wins_and_drops_zero() {
        let m = DokMatrix::from_entries(
            2,
            2,
            [
                Entry::new(0, 0, 5i64),
                Entry::new(0, 1, 2),
                Entry::new(0, 0, 0),
            ],
        );
        assert!(!m.contains(0, 0));
        assert_eq!(m.get(0, 1), 2);
        assert_eq!(m.nnz(), 1);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = DokMatrix::from_entries(2, 2, [Entry::new(0, 0, 1i64), Entry::new(1, 1, 2)]);
        let b = DokMatrix::from_entries(2, 2, [Entry::new(1, 1, 2i64), Entry::new(0, 0, 1)]);
        assert_eq!(a, b);
    }

    #[test]
    fn trait_access_and_summary() {
        let mut m = DokMatrix::<i64>::new(2, 4);
        m.set(0, 3, 9);
        m.set(1, 0, -1);

        assert_eq!(m.get_element(0, 3), Some(9));
        assert_eq!(m.get_element(0, 0), None);
        assert_eq!(m.dimensions(), (2, 4));

        let summary = m.summary();
        assert_eq!(summary.nnz, 2);
        assert_eq!(summary.density, 0.25);
        assert_eq!(summary.to_string(), "2x4 matrix, 2 non-zero (25.00% dense)");
    }
}
