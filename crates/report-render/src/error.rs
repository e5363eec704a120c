//! Error types for template rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or rendering a template.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No template file at the given path.
    #[error("Template not found: {}", .0.display())]
    TemplateMissing(PathBuf),

    /// IO error while reading the template.
    #[error("Failed to read template {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document container is not a readable zip archive.
    #[error("Invalid document container: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error while rebuilding the document container.
    #[error("Failed to write document part '{part}': {source}")]
    Part {
        part: String,
        #[source]
        source: std::io::Error,
    },

    /// Template syntax error or render failure in the named part.
    #[error("Template error in '{part}': {source}")]
    Template {
        part: String,
        #[source]
        source: upon::Error,
    },

    /// A part that should hold text is not valid UTF-8.
    #[error("Template part '{0}' is not valid UTF-8")]
    Encoding(String),

    /// The payload could not be turned into a template context.
    #[error("Failed to serialize payload: {0}")]
    Payload(#[from] serde_json::Error),
}
