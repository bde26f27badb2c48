#![no_std]

//! SPTX Core - Text Sparse Matrix Format Definitions
//!
//! This crate provides the format grammar and traits for the SPTX
//! line-oriented sparse matrix text format:
//!
//! ```text
//! rows=<int>
//! cols=<int>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Only grammar and interfaces live here; storage, arithmetic and file I/O
//! are provided by the `sptx` crate.

extern crate alloc;

pub mod error;
pub mod format;
pub mod traits;

pub use error::*;
pub use format::*;
pub use traits::*;
