//! Command-line interface for report-synth
//!
//! # Usage Examples
//!
//! ```bash
//! # Everything on the command line
//! report-synth --template report.docx --spreadsheet ids.xlsx --output monthly
//!
//! # Reproducible values, output into a directory
//! report-synth -t report.docx -s ids.xlsx -o monthly --seed 42 --output-dir out/
//!
//! # Print the data handed to the template as JSON
//! report-synth -t report.docx -s ids.xlsx --dry-run
//!
//! # Prompt for whatever is missing
//! report-synth
//! ```
//!
//! ## Config File
//! ```yaml
//! template: templates/report.docx
//! spreadsheet: data/ids.xlsx
//! output: monthly
//! output_dir: out
//! seed: 42
//! ```

use clap::Parser;
use report_synth::prompt::{Prompt, StdinPrompt};
use report_synth::{ReportArgs, RunConfig};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str =
    "report_synth=info,xlsx_source=info,report_generator=info,report_render=info";
const VERBOSE_LOG_FILTER: &str =
    "report_synth=debug,xlsx_source=debug,report_generator=debug,report_render=debug";

#[derive(Parser)]
#[command(name = "report-synth")]
#[command(about = "Generate a paginated report from a spreadsheet of identifiers and a document template")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: ReportArgs,

    /// Log debug details (overridden by RUST_LOG)
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut stdin_prompt = StdinPrompt::new();
    let prompt: Option<&mut dyn Prompt> = if !cli.args.no_prompt && std::io::stdin().is_terminal() {
        Some(&mut stdin_prompt)
    } else {
        None
    };

    let config = RunConfig::resolve(&cli.args, prompt)?;
    tracing::debug!("Resolved configuration: {config:?}");

    let summary = report_synth::run(&config)?;

    if config.dry_run {
        println!("{}", serde_json::to_string_pretty(&summary.payload)?);
    } else if let Some(path) = &summary.output {
        eprintln!(
            "Wrote {} ({} identifiers, {} pages)",
            path.display(),
            summary.identifier_count,
            summary.pagination.page_count
        );
    }

    Ok(())
}
