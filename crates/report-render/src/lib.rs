//! Template rendering for report-synth.
//!
//! A template is either plain UTF-8 text or a zip-based office document
//! (`.docx`, `.odt`, ...). Text templates are rendered whole. For documents
//! only the parts that carry body, header and footer text are rendered; every
//! other part is copied unchanged so the document stays valid.
//!
//! Templates use `upon` syntax and see the serialized payload as their
//! context:
//!
//! ```text
//! {% for page in pages %}Page {{ page.pageIndex }}
//! {% for row in page.rows %}{{ row.q4 }}: {{ row.q1 }} {{ row.q2 }} {{ row.q3 }}
//! {% endfor %}{% endfor %}
//! ```

mod container;
mod error;
mod template;
mod text;

pub use container::{is_renderable_part, render_container};
pub use error::RenderError;
pub use template::{Template, TemplateKind};
pub use text::{render_text, render_xml};
