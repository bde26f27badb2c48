//! Arithmetic over DOK matrices
//!
//! All three operations are pure: operands are borrowed read-only and the
//! result is a freshly built matrix. Cost is proportional to the stored
//! entries, never to the dense `rows * cols` grid. Results are written
//! through `set`, so sums and products that cancel to zero are never
//! materialized.

use hashbrown::HashMap;

use sptx_core::{MatrixElement, ShapeError};

use crate::dok::DokMatrix;

impl<T: MatrixElement> DokMatrix<T> {
    /// Element-wise sum; operands must have identical dimensions
    pub fn add(&self, rhs: &Self) -> Result<Self, ShapeError> {
        self.check_same_shape(rhs)?;
        let mut out = Self::new(self.rows(), self.cols());
        // union of stored keys: lhs entries combined with the rhs cell,
        // then the keys only rhs has
        for entry in self.iter() {
            out.set(entry.row, entry.col, entry.value + rhs.get(entry.row, entry.col));
        }
        for entry in rhs.iter() {
            if !self.contains(entry.row, entry.col) {
                out.set(entry.row, entry.col, entry.value);
            }
        }
        Ok(out)
    }

    /// Element-wise difference; operands must have identical dimensions
    pub fn sub(&self, rhs: &Self) -> Result<Self, ShapeError> {
        self.check_same_shape(rhs)?;
        let mut out = Self::new(self.rows(), self.cols());
        for entry in self.iter() {
            out.set(entry.row, entry.col, entry.value - rhs.get(entry.row, entry.col));
        }
        // keys only rhs has contribute their negation
        for entry in rhs.iter() {
            if !self.contains(entry.row, entry.col) {
                out.set(entry.row, entry.col, -entry.value);
            }
        }
        Ok(out)
    }

    /// Matrix product; the inner dimensions must agree
    ///
    /// The rhs entries are bucketed by row index first, so each lhs entry
    /// `(r, k, v)` only visits the rhs entries whose row equals `k` instead
    /// of scanning all of rhs.
    pub fn mul(&self, rhs: &Self) -> Result<Self, ShapeError> {
        if self.cols() != rhs.rows() {
            return Err(ShapeError::InnerDimensionMismatch {
                lhs: (self.rows(), self.cols()),
                rhs: (rhs.rows(), rhs.cols()),
            });
        }

        let mut rhs_by_row: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for entry in rhs.iter() {
            rhs_by_row
                .entry(entry.row)
                .or_default()
                .push((entry.col, entry.value));
        }

        let mut out = Self::new(self.rows(), rhs.cols());
        for entry in self.iter() {
            let Some(bucket) = rhs_by_row.get(&entry.col) else {
                continue;
            };
            for &(col, weight) in bucket {
                out.set(entry.row, col, out.get(entry.row, col) + entry.value * weight);
            }
        }
        Ok(out)
    }

    fn check_same_shape(&self, rhs: &Self) -> Result<(), ShapeError> {
        if self.rows() == rhs.rows() && self.cols() == rhs.cols() {
            Ok(())
        } else {
            Err(ShapeError::DimensionMismatch {
                lhs: (self.rows(), self.cols()),
                rhs: (rhs.rows(), rhs.cols()),
            })
        }
    }
}
