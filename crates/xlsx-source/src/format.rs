//! Recognized workbook formats.

use crate::error::ExtractError;
use std::fmt;
use std::path::Path;

/// Workbook formats the extractor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Office Open XML workbook (`.xlsx`)
    Xlsx,
    /// Legacy BIFF workbook (`.xls`)
    Xls,
}

impl SourceFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("xlsx") => Ok(SourceFormat::Xlsx),
            Some("xls") => Ok(SourceFormat::Xls),
            other => Err(ExtractError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: other.unwrap_or_default().to_string(),
            }),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Xlsx => "xlsx",
            SourceFormat::Xls => "xls",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.extension())
    }
}
