//! Report synthesis library.
//!
//! Reads identifiers from column D of a spreadsheet, synthesizes a paginated
//! data set around them and renders it through a document template.
//!
//! # Pipeline
//!
//! ```text
//! spreadsheet ──► xlsx_source::extract_identifiers
//!                        │
//!                        ▼
//!             report_generator::ReportGenerator  (paginate → synthesize → assemble)
//!                        │
//!                        ▼
//! template   ──► report_render::Template::render ──► <output>-<timestamp>.<ext>
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Render a Word template
//! report-synth --template report.docx --spreadsheet ids.xlsx --output monthly
//!
//! # Inspect the generated data without writing a document
//! report-synth -t report.docx -s ids.xlsx --seed 42 --dry-run
//!
//! # Take defaults from a config file, prompt for anything missing
//! report-synth --config report.yaml
//! ```

pub mod config;
pub mod output;
pub mod pipeline;
pub mod prompt;

pub use config::{FileConfig, ReportArgs, RunConfig};
pub use pipeline::{run, RunSummary};
