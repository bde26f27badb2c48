//! Error handling for matrix construction, arithmetic and file I/O
//!
//! The three failure kinds stay distinct so callers can react without
//! inspecting message strings: an unreadable file is [`MatrixError::Io`],
//! a readable file with bad content is [`MatrixError::Format`], and
//! incompatible operands are [`MatrixError::Shape`].

use std::path::PathBuf;

use sptx_core::{FormatError, ShapeError};
use thiserror::Error;

/// Top-level error for SPTX matrix operations
#[derive(Error, Debug)]
pub enum MatrixError {
    /// Reading or writing the backing file failed
    #[error("i/o failure on {}", path.display())]
    Io {
        /// The file involved
        path: PathBuf,
        /// The underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// The document does not conform to the SPTX grammar
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Operand shapes are incompatible for the requested operation
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Result type for SPTX operations
pub type Result<T> = std::result::Result<T, MatrixError>;
