//! Output file naming and writing.

use anyhow::Context;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::io::Write;
use std::path::Path;

/// Timestamp layout used in output file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// `<base>-<timestamp>.<extension>`, or `<base>-<timestamp>` without an extension.
pub fn output_file_name<Tz>(base: &str, timestamp: &DateTime<Tz>, extension: Option<&str>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let stamp = timestamp.format(TIMESTAMP_FORMAT);
    match extension.filter(|ext| !ext.is_empty()) {
        Some(ext) => format!("{base}-{stamp}.{ext}"),
        None => format!("{base}-{stamp}"),
    }
}

/// Write `bytes` to `path` without ever leaving a partial file behind.
///
/// The content goes to a temporary file in the same directory first and is
/// moved into place once complete. An existing file at `path` is never
/// overwritten.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("Failed to write output for {}", path.display()))?;
    file.as_file()
        .sync_all()
        .with_context(|| format!("Failed to flush output for {}", path.display()))?;
    file.persist_noclobber(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to save output file {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    #[test]
    fn test_output_file_name() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();

        assert_eq!(
            output_file_name("report", &timestamp, Some("docx")),
            "report-20240309-140507.docx"
        );
        assert_eq!(
            output_file_name("report", &timestamp, None),
            "report-20240309-140507"
        );
        assert_eq!(
            output_file_name("report", &timestamp, Some("")),
            "report-20240309-140507"
        );
    }

    #[test]
    fn test_write_atomically() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        write_atomically(&path, b"hello").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");

        // Only the final file remains
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_write_atomically_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, b"original").unwrap();

        assert!(write_atomically(&path, b"new").is_err());
        assert_eq!(std::fs::read(&path).unwrap(), b"original");
    }

    #[test]
    fn test_write_into_missing_directory_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        assert!(write_atomically(&path, b"data").is_err());
        assert!(!path.exists());
    }
}
