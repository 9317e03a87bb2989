//! Release archive
//!
//! Each fetched release is stored as `<prefix>/<YYYY-MM-DD>_<ontology key>`.
//! The newest archived release is the one with the latest date prefix;
//! file names whose prefix is not a date are ignored.

use crate::config::ChangesConfig;
use crate::storage::{StorageBackend, StorageError, join_key, read_text};
use chrono::NaiveDate;
use tracing::{debug, info};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// An archived ontology release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedRelease {
    /// Storage key of the archived document
    pub key: String,
    /// Release date taken from the key
    pub date: String,
}

/// Dated archive of ontology releases
pub struct ReleaseArchive<'a, B: StorageBackend + ?Sized> {
    storage: &'a B,
    config: &'a ChangesConfig,
}

impl<'a, B: StorageBackend + ?Sized> ReleaseArchive<'a, B> {
    pub fn new(storage: &'a B, config: &'a ChangesConfig) -> Self {
        Self { storage, config }
    }

    /// Store an ontology document under its release date, returning the key
    pub async fn archive_ontology(&self, date: &str, text: &str) -> Result<String, StorageError> {
        let key = self.config.archived_ontology_key(date);
        self.storage.write_file(&key, text.as_bytes()).await?;
        info!(key = %key, bytes = text.len(), "Archived ontology release");
        Ok(key)
    }

    /// Newest archived release, if any
    pub async fn latest_ontology(&self) -> Result<Option<ArchivedRelease>, StorageError> {
        self.latest_matching(|_| true).await
    }

    /// Newest archived release dated strictly before `date`
    ///
    /// Falls back to [`latest_ontology`](Self::latest_ontology) when `date`
    /// is not a `YYYY-MM-DD` date.
    pub async fn latest_ontology_before(
        &self,
        date: &str,
    ) -> Result<Option<ArchivedRelease>, StorageError> {
        match NaiveDate::parse_from_str(date, DATE_FORMAT) {
            Ok(limit) => self.latest_matching(|archived| archived < limit).await,
            Err(_) => self.latest_ontology().await,
        }
    }

    /// Read an archived document
    pub async fn read_ontology(&self, key: &str) -> Result<String, StorageError> {
        read_text(self.storage, key).await
    }

    async fn latest_matching(
        &self,
        accept: impl Fn(NaiveDate) -> bool,
    ) -> Result<Option<ArchivedRelease>, StorageError> {
        let names = match self.storage.list_files(&self.config.archive_prefix).await {
            Ok(names) => names,
            Err(StorageError::DirectoryNotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        let suffix = format!("_{}", self.config.ontology_key);
        let latest = names
            .iter()
            .filter_map(|name| {
                let prefix = name.strip_suffix(&suffix)?;
                match NaiveDate::parse_from_str(prefix, DATE_FORMAT) {
                    Ok(date) => Some((date, name)),
                    Err(_) => {
                        debug!(name = %name, "Ignoring archive entry without a date prefix");
                        None
                    }
                }
            })
            .filter(|(date, _)| accept(*date))
            .max_by_key(|(date, _)| *date)
            .map(|(date, name)| ArchivedRelease {
                key: join_key(&self.config.archive_prefix, name),
                date: date.format(DATE_FORMAT).to_string(),
            });

        Ok(latest)
    }
}
