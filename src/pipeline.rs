//! End-to-end report run: template check, extraction, synthesis, rendering.

use crate::config::RunConfig;
use crate::output::{output_file_name, write_atomically};
use anyhow::Context;
use chrono::Local;
use report_generator::{Pagination, ReportGenerator, ReportPayload};
use report_render::Template;
use std::path::PathBuf;
use tracing::info;
use xlsx_source::extract_identifiers;

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub identifier_count: usize,
    pub pagination: Pagination,
    pub payload: ReportPayload,
    /// Written document, `None` for a dry run.
    pub output: Option<PathBuf>,
}

/// Run the whole pipeline for `config`.
///
/// The template is loaded before the spreadsheet is touched, so a bad
/// template path fails fast. Nothing is written unless rendering succeeded.
pub fn run(config: &RunConfig) -> anyhow::Result<RunSummary> {
    let template = Template::load(&config.template).context("Cannot use the document template")?;

    let identifiers = extract_identifiers(&config.spreadsheet)
        .context("Cannot read identifiers from the spreadsheet")?;

    let report = ReportGenerator::with_seed(config.seed)
        .generate(&identifiers)
        .context("Failed to generate report data")?;
    info!(
        "Generated {} pages for {} identifiers",
        report.pagination.page_count,
        identifiers.len()
    );

    let output = if config.dry_run {
        info!("Dry run: skipping document output");
        None
    } else {
        let bytes = template
            .render(&report.payload)
            .with_context(|| format!("Failed to render template {}", template.path().display()))?;

        let name = output_file_name(&config.output_base, &Local::now(), template.extension());
        let path = config.output_dir.join(name);
        write_atomically(&path, &bytes)?;
        info!("Report written to {}", path.display());
        Some(path)
    };

    Ok(RunSummary {
        identifier_count: identifiers.len(),
        pagination: report.pagination,
        payload: report.payload,
        output,
    })
}
