//! Rendering of a single text source.

use crate::error::RenderError;
use serde::Serialize;
use serde_json::Value;

/// Render a plain text template against `data`.
pub fn render_text<S: Serialize>(source: &str, data: &S) -> Result<String, RenderError> {
    let context = serde_json::to_value(data)?;
    render_part("template", source, &context)
}

/// Render the XML document part named `part` against `data`.
///
/// String values are XML-escaped before they reach the template, so an
/// identifier such as `R&D <1>` cannot break the document markup. Template
/// errors carry `part` so the broken entry can be found in the archive.
pub fn render_xml<S: Serialize>(part: &str, source: &str, data: &S) -> Result<String, RenderError> {
    let mut context = serde_json::to_value(data)?;
    escape_strings(&mut context);
    render_part(part, source, &context)
}

fn render_part(part: &str, source: &str, context: &Value) -> Result<String, RenderError> {
    let engine = upon::Engine::new();
    let template_error = |source| RenderError::Template {
        part: part.to_string(),
        source,
    };

    let template = engine.compile(source).map_err(template_error)?;
    template
        .render(&engine, context)
        .to_string()
        .map_err(template_error)
}

fn escape_strings(value: &mut Value) {
    match value {
        Value::String(s) => *s = escape_xml(s),
        Value::Array(items) => items.iter_mut().for_each(escape_strings),
        Value::Object(map) => map.values_mut().for_each(escape_strings),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
