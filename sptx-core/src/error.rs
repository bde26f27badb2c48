//! Error types for SPTX format and shape violations

use alloc::string::String;

/// Errors raised while parsing the SPTX text format
///
/// Both variants carry the offending line verbatim so callers can cite it
/// in diagnostics without re-reading the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A `rows=`/`cols=` header line is missing or does not parse
    InvalidDimensionHeader {
        /// The line that failed to parse (empty if the line was missing)
        line: String,
    },
    /// An entry line does not match the `(row, col, value)` pattern
    MalformedEntry {
        /// The line that failed to parse
        line: String,
    },
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::InvalidDimensionHeader { line } => {
                write!(f, "missing or invalid dimension header: {line:?}")
            }
            FormatError::MalformedEntry { line } => {
                write!(f, "malformed entry line: {line:?}")
            }
        }
    }
}

impl core::error::Error for FormatError {}

/// Shape incompatibilities between arithmetic operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// Element-wise operations require identical dimensions
    DimensionMismatch {
        /// Left operand shape as (rows, cols)
        lhs: (usize, usize),
        /// Right operand shape as (rows, cols)
        rhs: (usize, usize),
    },
    /// Multiplication requires the left column count to equal the right row count
    InnerDimensionMismatch {
        /// Left operand shape as (rows, cols)
        lhs: (usize, usize),
        /// Right operand shape as (rows, cols)
        rhs: (usize, usize),
    },
}

impl core::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShapeError::DimensionMismatch { lhs, rhs } => write!(
                f,
                "matrices must have the same dimensions: {}x{} vs {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            ShapeError::InnerDimensionMismatch { lhs, rhs } => write!(
                f,
                "inner dimensions must agree: {}x{} * {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
        }
    }
}

impl core::error::Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn format_error_cites_line() {
        let err = FormatError::MalformedEntry {
            line: "(1, 2".to_string(),
        };
        assert!(format!("{err}").contains("(1, 2"));

        let err = FormatError::InvalidDimensionHeader {
            line: "cols=abc".to_string(),
        };
        assert!(format!("{err}").contains("cols=abc"));
    }

    #[test]
    fn shape_error_reports_both_shapes() {
        let err = ShapeError::InnerDimensionMismatch {
            lhs: (2, 3),
            rhs: (2, 3),
        };
        assert_eq!(format!("{err}"), "inner dimensions must agree: 2x3 * 2x3");
    }
}
