//! ontology-changes: compare two OBO releases from the command line

use clap::{Parser, Subcommand};
use ontology_changes_sdk::cli::CliError;
use ontology_changes_sdk::cli::commands::diff::{DiffArgs, ReportFormat, handle_diff};
use ontology_changes_sdk::cli::commands::summary::handle_summary;
use ontology_changes_sdk::config::ChangesConfig;
use ontology_changes_sdk::models::TermState;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ontology-changes", version, about = "Track changes between ontology releases")]
struct Args {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare two OBO documents and print the change report
    Diff {
        /// The newer release
        #[arg(long)]
        current: PathBuf,
        /// The older release
        #[arg(long)]
        previous: PathBuf,
        #[arg(long)]
        current_date: Option<String>,
        #[arg(long)]
        previous_date: Option<String>,
        #[arg(long, value_enum, default_value = "json")]
        format: ReportFormat,
        /// Indent JSON output
        #[arg(long)]
        pretty: bool,
        /// Terms driving the comparison
        #[arg(long, value_enum)]
        term_state: Option<TermState>,
        /// Write the report to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print counts describing an OBO document
    Summary { file: PathBuf },
}

fn run(args: Args) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => ChangesConfig::from_file(path)?,
        None => ChangesConfig::default(),
    };

    match args.command {
        Command::Diff {
            current,
            previous,
            current_date,
            previous_date,
            format,
            pretty,
            term_state,
            output,
        } => handle_diff(
            &DiffArgs {
                current,
                previous,
                current_date,
                previous_date,
                format,
                pretty,
                term_state,
                output,
            },
            &config,
        ),
        Command::Summary { file } => handle_summary(&file),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(args)?;
    Ok(())
}
