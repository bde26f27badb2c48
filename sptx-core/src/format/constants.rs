//! Wire-format constants for the SPTX text format

/// Prefix of the first header line: `rows=<int>`
pub const ROWS_PREFIX: &str = "rows=";

/// Prefix of the second header line: `cols=<int>`
pub const COLS_PREFIX: &str = "cols=";

/// Conventional file extension for SPTX matrix files
pub const FILE_EXTENSION: &str = "sptx";

/// Cell width used by the dense diagnostic rendering
pub const RENDER_CELL_WIDTH: usize = 8;
