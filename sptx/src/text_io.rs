//! SPTX document (de)serialization and file I/O
//!
//! A document is parsed in one pass over its non-blank lines: the first two
//! must be the dimension header, everything after must be entry triples. A
//! malformed line aborts the whole parse; no partial matrix is ever
//! returned. File loading is a single blocking read-to-completion.

use std::fs;
use std::path::Path;

use sptx_core::{Entry, FormatError, Header, MatrixElement};
use tracing::debug;

use crate::dok::DokMatrix;
use crate::error::{MatrixError, Result};

impl<T: MatrixElement> DokMatrix<T> {
    /// Parse a matrix from an SPTX document
    ///
    /// Blank lines are ignored anywhere. Entry coordinates are stored as
    /// written, without bounds checks against the declared header; use
    /// [`DokMatrix::out_of_bounds`] to audit them.
    pub fn from_text(content: &str) -> std::result::Result<Self, FormatError> {
        let mut lines = content.lines().filter(|line| !line.trim().is_empty());

        let rows_line = lines.next().unwrap_or("");
        let cols_line = lines.next().unwrap_or("");
        let header = Header::parse(rows_line, cols_line)?;

        let mut matrix = Self::new(header.rows, header.cols);
        for line in lines {
            let entry = Entry::parse(line)?;
            matrix.set(entry.row, entry.col, entry.value);
        }
        Ok(matrix)
    }

    /// Serialize to an SPTX document
    ///
    /// The header comes first, then one line per stored entry in
    /// unspecified order. `from_text` of the result reproduces this matrix.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n", Header::new(self.rows(), self.cols()));
        for entry in self.iter() {
            out.push_str(&format!("{entry}\n"));
        }
        out
    }

    /// Load a matrix from an SPTX file
    ///
    /// An unreadable file surfaces as [`MatrixError::Io`]; readable but
    /// non-conforming content as [`MatrixError::Format`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| MatrixError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let matrix = Self::from_text(&content)?;
        debug!(
            path = %path.display(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            nnz = matrix.nnz(),
            "loaded matrix"
        );
        Ok(matrix)
    }

    /// Write this matrix to an SPTX file, replacing any existing content
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_text()).map_err(|source| MatrixError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), nnz = self.nnz(), "saved matrix");
        Ok(())
    }
}
