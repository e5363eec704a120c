//! Report data synthesis for report-synth.
//!
//! This crate turns an ordered list of identifiers into the nested page/row
//! structure consumed by document templates. Every row carries three biased
//! random samples and, where one exists at its position, an identifier.
//!
//! # Architecture
//!
//! ```text
//! [Identifier]                 (from xlsx-source)
//!        │
//!        ▼
//!   paginate()        ──►  Pagination { pageCount, rowsPerPage, ... }
//!        │
//!        ▼
//!   synthesize_pages() ──►  [Page { pageIndex, rows: [Row { q1, q2, q3, q4 }] }]
//!        │                      ▲
//!        │                      └── generate_biased_value() x3 per row
//!        ▼
//!   assemble()        ──►  ReportPayload { pages, rows, pagesRest }
//! ```
//!
//! [`ReportGenerator`] wires these steps together around a single seeded
//! RNG so a run can be reproduced from its seed.
//!
//! # Example
//!
//! ```rust
//! use report_generator::{Identifier, ReportGenerator};
//!
//! let identifiers: Vec<Identifier> = ["A1", "B3"].into_iter().filter_map(Identifier::new).collect();
//!
//! let mut generator = ReportGenerator::new(42);
//! let report = generator.generate(&identifiers).unwrap();
//!
//! assert_eq!(report.pagination.page_count, 1);
//! assert_eq!(report.payload.rows().len(), 2);
//! ```

pub mod generator;
pub mod identifier;
pub mod pagination;
pub mod payload;
pub mod synthesis;
pub mod values;

// Re-exports for convenience
pub use generator::{GeneratedReport, GeneratorError, ReportGenerator};
pub use identifier::Identifier;
pub use pagination::{paginate, Pagination, ROWS_PER_PAGE};
pub use payload::{assemble, ReportPayload};
pub use synthesis::{synthesize_pages, synthesize_row, Page, Row};
pub use values::{generate, generate_biased_value};
