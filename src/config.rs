//! Run configuration.
//!
//! Values come from command-line flags, environment variables, an optional
//! YAML file and, for anything still missing, interactive prompts. The result
//! is a [`RunConfig`] that is built once and only read afterwards.

use crate::prompt::Prompt;
use anyhow::Context;
use clap::Args;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Output base name used when none is given.
pub const DEFAULT_OUTPUT_BASE: &str = "report";

/// Command-line arguments for a report run.
#[derive(Args, Clone, Debug, Default)]
pub struct ReportArgs {
    /// Path to the document template (.docx, .odt, or a text file)
    #[arg(long, short = 't', env = "REPORT_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Path to the spreadsheet with identifiers in column D (.xlsx or .xls)
    #[arg(long, short = 's', env = "REPORT_SPREADSHEET")]
    pub spreadsheet: Option<PathBuf>,

    /// Base name of the output file; a timestamp and the template extension are appended
    #[arg(long, short = 'o', env = "REPORT_OUTPUT")]
    pub output: Option<String>,

    /// Directory to write the output file into (default: current directory)
    #[arg(long, env = "REPORT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Random seed for reproducible values (same seed and spreadsheet = same report)
    #[arg(long, env = "REPORT_SEED")]
    pub seed: Option<u64>,

    /// YAML file with defaults for any of the options above
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the report data as JSON instead of writing a document
    #[arg(long)]
    pub dry_run: bool,

    /// Never ask for missing values; fail instead
    #[arg(long)]
    pub no_prompt: bool,
}

/// Defaults read from a YAML config file.
///
/// Relative paths are resolved against the directory holding the file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub template: Option<PathBuf>,
    pub spreadsheet: Option<PathBuf>,
    pub output: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl FileConfig {
    /// Load config from a YAML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        // An empty document is a valid, empty config
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    fn relative_to(self, base: &Path) -> Self {
        let resolve = |path: Option<PathBuf>| {
            path.map(|p| if p.is_relative() { base.join(p) } else { p })
        };

        Self {
            template: resolve(self.template),
            spreadsheet: resolve(self.spreadsheet),
            output_dir: resolve(self.output_dir),
            ..self
        }
    }
}

/// Everything a run needs. Built once by the CLI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub template: PathBuf,
    pub spreadsheet: PathBuf,
    pub output_base: String,
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
    pub dry_run: bool,
}

impl RunConfig {
    /// Merge flags, config file and prompt answers into a run configuration.
    ///
    /// Flags (and their environment variables) win over the config file.
    /// `prompt` is asked, in order, for the template, the spreadsheet and the
    /// output base when they are still missing. Without a prompt a missing
    /// template or spreadsheet is an error.
    pub fn resolve(args: &ReportArgs, prompt: Option<&mut dyn Prompt>) -> anyhow::Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        Self::merge(args, file, prompt)
    }

    /// Same as [`RunConfig::resolve`] with an already loaded config file.
    pub fn merge(
        args: &ReportArgs,
        file: FileConfig,
        mut prompt: Option<&mut dyn Prompt>,
    ) -> anyhow::Result<Self> {
        let template = match args.template.clone().or(file.template) {
            Some(path) => path,
            None => PathBuf::from(ask_required(
                &mut prompt,
                "Path to the document template",
                "--template",
            )?),
        };

        let spreadsheet = match args.spreadsheet.clone().or(file.spreadsheet) {
            Some(path) => path,
            None => PathBuf::from(ask_required(
                &mut prompt,
                "Path to the spreadsheet with identifiers",
                "--spreadsheet",
            )?),
        };

        let output_base = match args
            .output
            .clone()
            .or(file.output)
            .filter(|base| !base.trim().is_empty())
        {
            Some(base) => base.trim().to_string(),
            None => match prompt.as_mut() {
                Some(prompt) => {
                    let answer = clean_answer(&prompt.ask(&format!(
                        "Output file name (default: {DEFAULT_OUTPUT_BASE})"
                    ))?);
                    if answer.is_empty() {
                        DEFAULT_OUTPUT_BASE.to_string()
                    } else {
                        answer
                    }
                }
                None => DEFAULT_OUTPUT_BASE.to_string(),
            },
        };

        Ok(Self {
            template,
            spreadsheet,
            output_base,
            output_dir: args
                .output_dir
                .clone()
                .or(file.output_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            seed: args.seed.or(file.seed),
            dry_run: args.dry_run,
        })
    }
}

fn ask_required(
    prompt: &mut Option<&mut dyn Prompt>,
    question: &str,
    flag: &str,
) -> anyhow::Result<String> {
    let Some(prompt) = prompt.as_mut() else {
        anyhow::bail!("Missing required option {flag}");
    };

    let answer = clean_answer(&prompt.ask(question)?);
    if answer.is_empty() {
        anyhow::bail!("No value given for {flag}");
    }
    Ok(answer)
}

/// Trim an answer and strip one pair of surrounding quotes.
///
/// Terminals often quote a path when a file is dragged onto them.
pub fn clean_answer(answer: &str) -> String {
    let trimmed = answer.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.trim().to_string();
        }
    }
    trimmed.to_string()
}
