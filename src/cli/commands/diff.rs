//! Diff command implementation

use super::load_document;
use crate::cli::error::CliError;
use crate::cli::output::format_change_counts;
use crate::config::ChangesConfig;
use crate::diff::{ReleaseDates, SnapshotDiffer};
use crate::export::{JsonReportExporter, TsvReportExporter};
use crate::models::TermState;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Rendered form of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Json,
    Tsv,
}

/// Arguments of the diff command
#[derive(Debug, Clone)]
pub struct DiffArgs {
    pub current: PathBuf,
    pub previous: PathBuf,
    pub current_date: Option<String>,
    pub previous_date: Option<String>,
    pub format: ReportFormat,
    pub pretty: bool,
    pub term_state: Option<TermState>,
    pub output: Option<PathBuf>,
}

/// Handle the diff command
pub fn handle_diff(args: &DiffArgs, config: &ChangesConfig) -> Result<(), CliError> {
    let current = load_document(&args.current)?;
    let previous = load_document(&args.previous)?;
    for (path, result) in [(&args.current, &current), (&args.previous, &previous)] {
        if !result.errors.is_empty() {
            warn!(
                "{}: skipped {} record(s) and {} line(s)",
                path.display(),
                result.skipped_records(),
                result.skipped_lines()
            );
        }
    }

    let term_state = args.term_state.unwrap_or(config.term_state);

    let mut dates = ReleaseDates::default();
    if let Some(date) = &args.current_date {
        dates.current = date.clone();
    }
    if let Some(date) = &args.previous_date {
        dates.previous = date.clone();
    }

    let report = SnapshotDiffer::new()
        .with_term_state(term_state)
        .diff(&current.snapshot, &previous.snapshot, &dates);
    eprintln!("{}", format_change_counts(&report));

    let exported = match args.format {
        ReportFormat::Json => JsonReportExporter {
            pretty: args.pretty || config.pretty_json,
        }
        .export(&report)?,
        ReportFormat::Tsv => TsvReportExporter::new(config.ontology_label.as_str()).export(&report)?,
    };

    match &args.output {
        Some(path) => write_output(path, &exported.content),
        None => {
            print!("{}", exported.content);
            Ok(())
        }
    }
}

fn write_output(path: &Path, content: &str) -> Result<(), CliError> {
    std::fs::write(path, content)
        .map_err(|e| CliError::FileWriteError(path.to_path_buf(), e.to_string()))
}
