//! Core matrix abstraction traits
//!
//! This module defines the access interface that sparse matrix
//! implementations satisfy, independent of their storage layout.

use super::element::MatrixElement;

/// Core sparse matrix trait for storage-agnostic access
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get the stored element at the specified position
    ///
    /// Returns `None` if the cell is empty, which by the sparsity invariant
    /// is the same as the cell holding zero.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get the number of non-zero elements stored
    fn nnz(&self) -> usize;

    /// Fraction of cells holding a non-zero value
    fn density(&self) -> f64 {
        let (rows, cols) = self.dimensions();
        let total = rows * cols;
        if total == 0 {
            0.0
        } else {
            self.nnz() as f64 / total as f64
        }
    }
}
