//! SPTX entry line grammar
//!
//! Every line after the header describes one matrix entry:
//!
//! ```text
//! (<row>, <col>, <value>)
//! ```
//!
//! Row and column are unsigned, the value is signed. Whitespace after the
//! commas is tolerated. The whole line must be the triple; trailing junk
//! makes the line malformed rather than being ignored.

use alloc::string::ToString;
use core::str::FromStr;

use crate::error::FormatError;
use crate::traits::MatrixElement;

/// One `(row, col, value)` triple from an SPTX entry line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T = i64> {
    /// Row coordinate
    pub row: usize,
    /// Column coordinate
    pub col: usize,
    /// Entry value; zero is representable here but never stored in a matrix
    pub value: T,
}

impl<T> Entry<T> {
    /// Create an entry from its parts
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }
}

impl<T: MatrixElement> Entry<T> {
    /// Parse a single entry line
    pub fn parse(line: &str) -> Result<Self, FormatError> {
        let malformed = || FormatError::MalformedEntry {
            line: line.to_string(),
        };

        let body = line
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;

        let mut fields = body.split(',');
        let row = parse_field(fields.next()).ok_or_else(malformed)?;
        let col = parse_field(fields.next()).ok_or_else(malformed)?;
        let value = parse_field(fields.next()).ok_or_else(malformed)?;
        if fields.next().is_some() {
            return Err(malformed());
        }

        Ok(Self { row, col, value })
    }
}

/// Parse one comma-separated field, ignoring surrounding whitespace
fn parse_field<T: FromStr>(field: Option<&str>) -> Option<T> {
    field.and_then(|raw| raw.trim().parse().ok())
}

impl<T: MatrixElement> core::fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;

    #[test]
    fn parses_valid_entries() {
        assert_eq!(Entry::parse("(0, 1, 5)"), Ok(Entry::new(0, 1, 5i64)));
        assert_eq!(Entry::parse("(2,3,-7)"), Ok(Entry::new(2, 3, -7i64)));
        assert_eq!(Entry::parse("  (10, 20, 0)  "), Ok(Entry::new(10, 20, 0i64)));
        // whitespace inside the parentheses is fine
        assert_eq!(Entry::parse("( 1 , 2 , 3 )"), Ok(Entry::new(1, 2, 3i64)));
    }

    #[test]
    fn rejects_malformed_entries() {
        for line in [
            "(1, 2)",          // too few fields
            "(1, 2, 3, 4)",    // too many fields
            "(1, 2, 3",        // unterminated
            "1, 2, 3)",        // missing opener
            "(a, 2, 3)",       // non-numeric row
            "(-1, 2, 3)",      // negative coordinate
            "(1, 2, x)",       // non-numeric value
            "(1, 2, 3) extra", // trailing junk
            "",                // empty
        ] {
            assert_eq!(
                Entry::<i64>::parse(line),
                Err(FormatError::MalformedEntry {
                    line: String::from(line.trim()),
                }),
                "line {line:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_round_trips() {
        let entry = Entry::new(4, 7, -12i64);
        assert_eq!(format!("{entry}"), "(4, 7, -12)");
        assert_eq!(Entry::parse(&format!("{entry}")), Ok(entry));
    }
}
