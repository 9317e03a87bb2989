//! Error types for change-tracking runs

use thiserror::Error;

use crate::config::ConfigError;
use crate::fetch::FetchError;
use crate::import::ImportError;
use crate::storage::StorageError;

/// Errors that abort a change-tracking run
#[derive(Error, Debug)]
pub enum ChangeTrackerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to parse {release} release: {source}")]
    Import {
        release: &'static str,
        #[source]
        source: ImportError,
    },

    #[error("No archived release found under '{0}'")]
    NoPreviousRelease(String),
}

/// Result type for change-tracking runs
pub type ChangeTrackerResult<T> = Result<T, ChangeTrackerError>;
