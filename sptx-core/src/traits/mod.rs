//! Abstract interfaces for the SPTX ecosystem
//!
//! Traits are pure interfaces - no concrete implementations.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::SparseMatrix;
