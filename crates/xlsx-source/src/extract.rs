//! Identifier extraction from the first worksheet.

use crate::cell::{cell_text, column_letter};
use crate::error::ExtractError;
use crate::format::SourceFormat;
use calamine::{open_workbook_auto, Data, Range, Reader};
use report_generator::Identifier;
use std::path::Path;
use tracing::{debug, info};

/// 0-based index of the identifier column (column D).
pub const IDENTIFIER_COLUMN: u32 = 3;

/// Rows at the top of the populated range that hold headers, not data.
pub const HEADER_ROWS: u32 = 1;

/// Header plus at least one data row.
pub const MIN_ROWS: usize = HEADER_ROWS as usize + 1;

/// Columns needed for the identifier column to exist.
pub const MIN_COLUMNS: usize = IDENTIFIER_COLUMN as usize + 1;

/// Read the identifier list from the first sheet of the workbook at `path`.
///
/// Checks run in order: the file exists, its extension is `.xlsx` or `.xls`,
/// the workbook opens and has a sheet, and the sheet passes
/// [`scan_identifiers`].
pub fn extract_identifiers(path: &Path) -> Result<Vec<Identifier>, ExtractError> {
    if path.as_os_str().is_empty() || !path.is_file() {
        return Err(ExtractError::SourceMissing(path.to_path_buf()));
    }

    let format = SourceFormat::from_path(path)?;
    info!("Reading identifiers from {} ({format})", path.display());

    let mut workbook = open_workbook_auto(path).map_err(|source| ExtractError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ExtractError::NoSheets(path.to_path_buf()))?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|source| ExtractError::SheetRead {
            sheet: sheet.clone(),
            source,
        })?;

    let identifiers = scan_identifiers(&range, &sheet)?;
    info!(
        "Found {} identifiers in column {} of sheet '{sheet}'",
        identifiers.len(),
        column_letter(IDENTIFIER_COLUMN as usize)
    );

    Ok(identifiers)
}

/// Collect identifiers from an already loaded sheet range.
///
/// The first row of the populated range is the header. Every later row up to
/// the last populated one contributes its column D value when that value is
/// non-blank after trimming. Order and duplicates are kept as they are.
///
/// Column positions are absolute, so a sheet whose populated range starts
/// right of column A still has to reach column D.
pub fn scan_identifiers(range: &Range<Data>, sheet: &str) -> Result<Vec<Identifier>, ExtractError> {
    let (Some(start), Some(end)) = (range.start(), range.end()) else {
        return Err(ExtractError::EmptySheet(sheet.to_string()));
    };

    let rows = (end.0 - start.0) as usize + 1;
    if rows < MIN_ROWS {
        return Err(ExtractError::TooFewRows {
            sheet: sheet.to_string(),
            rows,
        });
    }

    let columns = end.1 as usize + 1;
    if columns < MIN_COLUMNS {
        return Err(ExtractError::TooFewColumns {
            sheet: sheet.to_string(),
            columns,
            required: MIN_COLUMNS,
            column: column_letter(IDENTIFIER_COLUMN as usize),
        });
    }

    let first_data_row = start.0 + HEADER_ROWS;
    let rows_scanned = (end.0 - first_data_row) as usize + 1;
    let mut skipped = 0usize;

    let identifiers: Vec<Identifier> = (first_data_row..=end.0)
        .filter_map(|row| {
            let identifier = range
                .get_value((row, IDENTIFIER_COLUMN))
                .and_then(cell_text)
                .and_then(|text| Identifier::new(&text));
            if identifier.is_none() {
                skipped += 1;
            }
            identifier
        })
        .collect();

    debug!(
        "Scanned {rows_scanned} data rows of sheet '{sheet}', skipped {skipped} blank cells"
    );

    if identifiers.is_empty() {
        return Err(ExtractError::NoIdentifiers {
            sheet: sheet.to_string(),
            column: column_letter(IDENTIFIER_COLUMN as usize),
            rows_scanned,
        });
    }

    Ok(identifiers)
}
