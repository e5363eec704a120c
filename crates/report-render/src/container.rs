//! Zip-based document templates.

use crate::error::RenderError;
use crate::text::render_xml;
use serde::Serialize;
use std::io::{Cursor, Read, Write};
use tracing::debug;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Whether a part of an office document holds renderable text.
///
/// Covers the body, headers and footers of word processing documents, the
/// slides of presentations, spreadsheet shared strings and OpenDocument
/// `content.xml` / `styles.xml`.
pub fn is_renderable_part(name: &str) -> bool {
    let in_dir_with_prefix = |dir: &str, prefix: &str| {
        name.strip_prefix(dir)
            .is_some_and(|file| file.starts_with(prefix) && file.ends_with(".xml") && !file.contains('/'))
    };

    matches!(
        name,
        "word/document.xml" | "xl/sharedStrings.xml" | "content.xml" | "styles.xml"
    ) || in_dir_with_prefix("word/", "header")
        || in_dir_with_prefix("word/", "footer")
        || in_dir_with_prefix("ppt/slides/", "slide")
}

/// Render every text part of the zip archive in `bytes` and return the new archive.
///
/// Entry order and compression methods are preserved.
pub fn render_container<S: Serialize>(bytes: &[u8], data: &S) -> Result<Vec<u8>, RenderError> {
    let context = serde_json::to_value(data)?;

    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let mut rendered_parts = 0usize;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let name = file.name().to_string();
        let method = match file.compression() {
            CompressionMethod::Stored => CompressionMethod::Stored,
            _ => CompressionMethod::Deflated,
        };
        let options = FileOptions::<()>::default().compression_method(method);

        if file.is_dir() {
            writer.add_directory(name, options)?;
            continue;
        }

        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .map_err(|source| RenderError::Part {
                part: name.clone(),
                source,
            })?;

        let output = if is_renderable_part(&name) {
            let source =
                String::from_utf8(buf).map_err(|_| RenderError::Encoding(name.clone()))?;
            rendered_parts += 1;
            render_xml(&name, &source, &context)?.into_bytes()
        } else {
            buf
        };

        writer.start_file(name.as_str(), options)?;
        writer
            .write_all(&output)
            .map_err(|source| RenderError::Part { part: name, source })?;
    }

    debug!("Rendered {rendered_parts} of {} document parts", archive.len());
    Ok(writer.finish()?.into_inner())
}
