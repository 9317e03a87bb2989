//! Report publishing
//!
//! Writes a change report in both rendered forms, once under the "latest"
//! keys and once under dated archive keys.

use crate::config::ChangesConfig;
use crate::diff::ChangeReport;
use crate::export::{ExportError, JsonReportExporter, TsvReportExporter};
use crate::storage::{StorageBackend, StorageError};
use serde::Serialize;
use tracing::info;

/// Publishes change reports to a storage backend
pub struct ReportPublisher<'a, B: StorageBackend + ?Sized> {
    storage: &'a B,
    config: &'a ChangesConfig,
}

impl<'a, B: StorageBackend + ?Sized> ReportPublisher<'a, B> {
    pub fn new(storage: &'a B, config: &'a ChangesConfig) -> Self {
        Self { storage, config }
    }

    /// Store a text artifact
    pub async fn store_text(&self, key: &str, text: &str) -> Result<(), StorageError> {
        self.storage.write_file(key, text.as_bytes()).await?;
        info!(key, bytes = text.len(), "Stored text artifact");
        Ok(())
    }

    /// Serialize a value as JSON and store it
    pub async fn store_structured<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        let content = if self.config.pretty_json {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .map_err(|e| {
            StorageError::SerializationError(format!("Failed to serialize {}: {}", key, e))
        })?;

        self.storage.write_file(key, content.as_bytes()).await?;
        info!(key, bytes = content.len(), "Stored structured artifact");
        Ok(())
    }

    /// Write the report under the latest and the dated archive keys
    ///
    /// Returns the written keys: latest JSON, latest TSV, archived JSON,
    /// archived TSV.
    pub async fn publish(
        &self,
        report: &ChangeReport,
        release_date: &str,
    ) -> Result<Vec<String>, StorageError> {
        let json = JsonReportExporter {
            pretty: self.config.pretty_json,
        };
        let structured = json.to_structured(report);
        let tabular = TsvReportExporter::new(self.config.ontology_label.as_str())
            .export(report)
            .map_err(export_to_storage)?
            .content;

        let latest_json = self.config.latest_json_key.clone();
        let latest_tsv = self.config.latest_tsv_key.clone();
        let archived_json = self.config.archived_json_key(release_date);
        let archived_tsv = self.config.archived_tsv_key(release_date);

        self.store_structured(&latest_json, structured).await?;
        self.store_structured(&archived_json, structured).await?;
        self.store_text(&latest_tsv, &tabular).await?;
        self.store_text(&archived_tsv, &tabular).await?;

        info!(
            release_date,
            added = report.summary.added,
            removed = report.summary.removed,
            modified = report.summary.modified,
            "Published change report"
        );
        Ok(vec![latest_json, latest_tsv, archived_json, archived_tsv])
    }
}

fn export_to_storage(err: ExportError) -> StorageError {
    StorageError::SerializationError(err.to_string())
}
