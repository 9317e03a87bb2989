//! Summary command implementation

use super::load_document;
use crate::cli::error::CliError;
use crate::cli::output::format_summary;
use std::path::Path;

/// Handle the summary command
pub fn handle_summary(path: &Path) -> Result<(), CliError> {
    let result = load_document(path)?;
    print!("{}", format_summary(path, &result));
    Ok(())
}
