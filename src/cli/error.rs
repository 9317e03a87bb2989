//! CLI error types

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::import::ImportError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Failed to parse {0}: {1}")]
    ParseError(PathBuf, ImportError),

    #[error(transparent)]
    ExportError(#[from] ExportError),

    #[error(transparent)]
    ConfigError(#[from] ConfigError),
}
