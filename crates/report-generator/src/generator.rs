//! Seeded driver that runs pagination, synthesis and assembly in one go.

use crate::identifier::Identifier;
use crate::pagination::{paginate, Pagination};
use crate::payload::{assemble, ReportPayload};
use crate::synthesis::synthesize_pages;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Extraction should have rejected an empty identifier list already.
    #[error("Cannot generate a report without identifiers")]
    NoIdentifiers,
}

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedReport {
    pub pagination: Pagination,
    pub payload: ReportPayload,
}

/// Report generator backed by a single RNG.
///
/// Built with [`ReportGenerator::new`] the output is fully determined by the
/// seed and the identifiers.
pub struct ReportGenerator {
    rng: StdRng,
}

impl ReportGenerator {
    /// Create a generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Use `seed` when given, entropy otherwise.
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Paginate `identifiers`, synthesize every page and assemble the payload.
    pub fn generate(
        &mut self,
        identifiers: &[Identifier],
    ) -> Result<GeneratedReport, GeneratorError> {
        if identifiers.is_empty() {
            return Err(GeneratorError::NoIdentifiers);
        }

        let pagination = paginate(identifiers);
        debug!(
            "Paginating {} identifiers into {} pages of up to {} rows (last page: {} rows)",
            pagination.total_items,
            pagination.page_count,
            pagination.rows_per_page,
            pagination.last_page_row_count
        );

        let pages = synthesize_pages(
            &mut self.rng,
            pagination.page_count,
            pagination.rows_per_page,
            identifiers,
        );

        Ok(GeneratedReport {
            pagination,
            payload: assemble(pages),
        })
    }
}
