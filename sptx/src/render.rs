//! Dense diagnostic rendering
//!
//! Produces the full `rows x cols` grid with every cell right-aligned to a
//! fixed width, for eyeballing small matrices. Unlike everything else in
//! this crate the cost is the dense grid, so this is display-only and not
//! part of the data contract.

use sptx_core::format::constants::RENDER_CELL_WIDTH;
use sptx_core::MatrixElement;

use crate::dok::DokMatrix;

impl<T: MatrixElement> DokMatrix<T> {
    /// Render the dense grid, one line per declared row
    ///
    /// Cells outside the stored entry set print as zero. Entries stored
    /// outside the declared extents are not visible here.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows() * (self.cols() * RENDER_CELL_WIDTH + 1));
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                out.push_str(&format!(
                    "{:>width$}",
                    self.get(row, col),
                    width = RENDER_CELL_WIDTH
                ));
            }
            out.push('\n');
        }
        out
    }
}
