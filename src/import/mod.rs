//! Import functionality
//!
//! Provides the parser for OBO ontology documents. A document is split into
//! its header, `[Term]` stanzas and `[Typedef]` stanzas and turned into a
//! [`Snapshot`](crate::models::Snapshot).

pub mod obo;

use crate::models::Snapshot;

/// Result of an import operation
#[derive(Debug)]
pub struct ImportResult {
    /// Parsed release
    pub snapshot: Snapshot,
    /// Records and lines that were skipped while parsing
    pub errors: Vec<ImportError>,
}

impl ImportResult {
    /// Number of stanzas dropped because they never declared an `id`
    pub fn skipped_records(&self) -> usize {
        self.errors
            .iter()
            .filter(|e| matches!(e, ImportError::MissingField { .. }))
            .count()
    }

    /// Number of lines dropped because they had no tag separator
    pub fn skipped_lines(&self) -> usize {
        self.errors
            .iter()
            .filter(|e| matches!(e, ImportError::MalformedLine { .. }))
            .count()
    }
}

/// Error during import
///
/// Only `MalformedDocument` aborts a parse. The other variants are collected
/// in [`ImportResult::errors`] and parsing carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
    #[error("{section} #{record} has no '{field}' field, record skipped")]
    MissingField {
        section: &'static str,
        record: usize,
        field: &'static str,
    },
    #[error("{section} #{record}: line without tag separator skipped: {line}")]
    MalformedLine {
        section: &'static str,
        record: usize,
        line: String,
    },
}

// Re-export for convenience
pub use obo::{OboImporter, parse_document};
