//! Error types for identifier extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading identifiers from a workbook.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No file at the given path.
    #[error("Spreadsheet not found: {} (check the path and try again)", .0.display())]
    SourceMissing(PathBuf),

    /// The file extension is not one of the recognized workbook formats.
    #[error(
        "Unsupported spreadsheet format '{extension}' for {}: save the file as .xlsx or .xls",
        path.display()
    )]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// The workbook could not be opened or parsed.
    #[error("Failed to open spreadsheet {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The workbook has no worksheets.
    #[error("Spreadsheet {} contains no sheets", .0.display())]
    NoSheets(PathBuf),

    /// The first worksheet exists but could not be read.
    #[error("Failed to read sheet '{sheet}': {source}")]
    SheetRead {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    /// The first worksheet has no populated cells.
    #[error("Sheet '{0}' is empty: put a header row and the identifiers in column D")]
    EmptySheet(String),

    /// Only a header row, or nothing below it.
    #[error(
        "Sheet '{sheet}' has {rows} row(s): expected a header row followed by at least one data row"
    )]
    TooFewRows { sheet: String, rows: usize },

    /// The populated range ends before the identifier column.
    #[error(
        "Sheet '{sheet}' has {columns} column(s): identifiers are read from column {column}, so at least {required} columns are needed"
    )]
    TooFewColumns {
        sheet: String,
        columns: usize,
        required: usize,
        column: String,
    },

    /// Every cell in the identifier column below the header was blank.
    #[error("No identifiers found in column {column} of sheet '{sheet}' (checked {rows_scanned} data rows)")]
    NoIdentifiers {
        sheet: String,
        column: String,
        rows_scanned: usize,
    },
}
