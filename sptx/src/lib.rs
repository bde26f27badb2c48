//! SPTX - Sparse matrices over the SPTX text exchange format
//!
//! This library stores matrices sparsely (only non-zero entries), parses
//! and writes the SPTX line-oriented text format, and provides the three
//! exact-integer algebraic operations: addition, subtraction and
//! multiplication.
//!
//! ## Architecture
//!
//! SPTX follows a specification/implementation separation:
//!
//! - **sptx-core**: format grammar, traits, and error definitions (no I/O)
//! - **sptx**: DOK storage, arithmetic, rendering, and file I/O
//!
//! ## Quick Start
//!
//! ```rust
//! use sptx::DokMatrix;
//!
//! fn example() -> Result<(), sptx::MatrixError> {
//!     let identity = DokMatrix::<i64>::from_text("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 1)\n")?;
//!
//!     let mut b = DokMatrix::<i64>::new(2, 2);
//!     b.set(0, 1, 5);
//!     b.set(1, 0, 3);
//!
//!     let product = identity.mul(&b)?;
//!     assert_eq!(product, b);
//!     Ok(())
//! }
//! example().unwrap();
//! ```
//!
//! ## Format
//!
//! ```text
//! rows=<int>
//! cols=<int>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Values are signed integers; a stored value is never zero (setting a cell
//! to zero removes it). Entry order in serialized output is unspecified.

// Re-export core grammar, traits and error definitions
pub use sptx_core::{Entry, FormatError, Header, MatrixElement, ShapeError, SparseMatrix};

// Implementation modules
pub mod dok;
pub mod error;
mod ops;
mod render;
mod text_io;

// Public exports
pub use dok::{DokMatrix, MatrixSummary};
pub use error::{MatrixError, Result};
