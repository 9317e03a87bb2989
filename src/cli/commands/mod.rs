//! CLI command implementations

pub mod diff;
pub mod summary;

use crate::cli::error::CliError;
use crate::import::{ImportResult, OboImporter};
use std::path::Path;

/// Read and parse an OBO file
pub(crate) fn load_document(path: &Path) -> Result<ImportResult, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
    OboImporter::new()
        .parse(&content)
        .map_err(|e| CliError::ParseError(path.to_path_buf(), e))
}
