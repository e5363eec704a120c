//! Spreadsheet identifier extraction for report-synth.
//!
//! Reads the first sheet of an `.xlsx` or `.xls` workbook and collects the
//! non-empty values of column D, skipping the header row. Every way the file
//! can fall short (missing, wrong format, no sheets, too small, no values)
//! has its own [`ExtractError`] variant with a message the user can act on.

mod cell;
mod error;
mod extract;
mod format;

pub use error::ExtractError;
pub use extract::{
    extract_identifiers, scan_identifiers, HEADER_ROWS, IDENTIFIER_COLUMN, MIN_COLUMNS, MIN_ROWS,
};
pub use format::SourceFormat;
