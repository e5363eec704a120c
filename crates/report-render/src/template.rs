//! Loaded templates.

use crate::container::render_container;
use crate::error::RenderError;
use crate::text::render_text;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Extensions of zip-based office documents.
const CONTAINER_EXTENSIONS: &[&str] = &["docx", "dotx", "pptx", "xlsx", "odt", "ods"];

/// How a template's bytes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// UTF-8 text rendered as a whole.
    Text,
    /// Zip archive whose text parts are rendered.
    Container,
}

impl TemplateKind {
    pub fn from_path(path: &Path) -> Self {
        let is_container = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                CONTAINER_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            });

        if is_container {
            TemplateKind::Container
        } else {
            TemplateKind::Text
        }
    }
}

/// A template read fully into memory.
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    kind: TemplateKind,
    bytes: Vec<u8>,
}

impl Template {
    /// Read the template at `path`.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        if !path.is_file() {
            return Err(RenderError::TemplateMissing(path.to_path_buf()));
        }

        let bytes = std::fs::read(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let kind = TemplateKind::from_path(path);
        info!(
            "Loaded {:?} template {} ({} bytes)",
            kind,
            path.display(),
            bytes.len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            kind,
            bytes,
        })
    }

    /// Build a template from bytes already in memory.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        let path = path.into();
        Self {
            kind: TemplateKind::from_path(&path),
            path,
            bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// Extension of the template file, reused for the output file.
    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|ext| ext.to_str())
    }

    /// Render the template against `data` and return the output bytes.
    pub fn render<S: Serialize>(&self, data: &S) -> Result<Vec<u8>, RenderError> {
        match self.kind {
            TemplateKind::Container => render_container(&self.bytes, data),
            TemplateKind::Text => {
                let source = std::str::from_utf8(&self.bytes)
                    .map_err(|_| RenderError::Encoding(self.path.display().to_string()))?;
                Ok(render_text(source, data)?.into_bytes())
            }
        }
    }
}
