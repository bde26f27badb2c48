//! SPTX header line grammar
//!
//! An SPTX document opens with two dimension lines:
//!
//! ```text
//! rows=<int>
//! cols=<int>
//! ```
//!
//! The declared extents are fixed for the lifetime of the matrix they
//! describe. Entry coordinates are not validated against them here; the
//! header only records what the document claims.

use alloc::string::ToString;

use crate::error::FormatError;
use crate::format::constants::{COLS_PREFIX, ROWS_PREFIX};

/// Declared dimensions from the two header lines of an SPTX document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Header {
    /// Create a header with the given dimensions
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Parse the header from the first two non-blank lines of a document
    ///
    /// The first line must be `rows=<int>` and the second `cols=<int>`.
    /// Surrounding whitespace on a line is ignored; whitespace between the
    /// prefix and the integer is not.
    pub fn parse(rows_line: &str, cols_line: &str) -> Result<Self, FormatError> {
        let rows = Self::parse_dimension(rows_line, ROWS_PREFIX)?;
        let cols = Self::parse_dimension(cols_line, COLS_PREFIX)?;
        Ok(Self { rows, cols })
    }

    /// Parse one `name=<int>` dimension line
    fn parse_dimension(line: &str, prefix: &str) -> Result<usize, FormatError> {
        let invalid = || FormatError::InvalidDimensionHeader {
            line: line.to_string(),
        };
        line.trim()
            .strip_prefix(prefix)
            .ok_or_else(invalid)?
            .parse()
            .map_err(|_| invalid())
    }
}

impl core::fmt::Display for Header {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{ROWS_PREFIX}{}\n{COLS_PREFIX}{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn parses_valid_header() {
        assert_eq!(Header::parse("rows=3", "cols=4"), Ok(Header::new(3, 4)));
        assert_eq!(Header::parse("  rows=0  ", "cols=0"), Ok(Header::new(0, 0)));
    }

    #[test]
    fn rejects_bad_dimension_lines() {
        // wrong prefix
        assert_eq!(
            Header::parse("rows=3", "columns=4"),
            Err(FormatError::InvalidDimensionHeader {
                line: String::from("columns=4"),
            })
        );
        // non-numeric count
        assert_eq!(
            Header::parse("rows=3", "cols=abc"),
            Err(FormatError::InvalidDimensionHeader {
                line: String::from("cols=abc"),
            })
        );
        // negative count
        assert!(Header::parse("rows=-3", "cols=4").is_err());
        // swapped order
        assert!(Header::parse("cols=4", "rows=3").is_err());
        // missing line surfaces as an empty offending line
        assert_eq!(
            Header::parse("", "cols=4"),
            Err(FormatError::InvalidDimensionHeader {
                line: String::new(),
            })
        );
    }

    #[test]
    fn display_emits_wire_form() {
        use alloc::format;
        assert_eq!(format!("{}", Header::new(2, 5)), "rows=2\ncols=5");
    }
}
