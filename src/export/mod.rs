//! Export functionality
//!
//! Renders a [`ChangeReport`](crate::diff::ChangeReport) into its published
//! artifacts:
//! - JSON (the structured report)
//! - TSV (a flattened, line-oriented listing)

pub mod json;
pub mod tsv;

/// Result of an export operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

impl ExportResult {
    /// MIME type matching the format identifier
    pub fn content_type(&self) -> &'static str {
        match self.format.as_str() {
            json::FORMAT => "application/json",
            _ => "text/plain",
        }
    }
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::SerializationError(err.to_string())
    }
}

// Re-export for convenience
pub use json::JsonReportExporter;
pub use tsv::TsvReportExporter;
