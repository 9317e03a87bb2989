//! Release watcher
//!
//! The last announced date is kept under the configured release-date key.
//! A missing key counts as "never announced".

use super::{Notifier, NotifyError, ReleaseNotice};
use crate::config::ChangesConfig;
use crate::fetch::{FetchError, ReleaseFetcher, fetch_release_date};
use crate::storage::{StorageBackend, StorageError, read_text};
use tracing::info;

/// Outcome of a release check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseCheck {
    /// A release not seen before; the notice was sent
    NewRelease(String),
    /// The declared release was already announced
    UpToDate(String),
}

/// Errors raised while checking for a new release
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Announces each new release exactly once
pub struct ReleaseWatcher {
    config: ChangesConfig,
}

impl ReleaseWatcher {
    pub fn new(config: ChangesConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChangesConfig {
        &self.config
    }

    pub async fn check<F, B, N>(
        &self,
        fetcher: &F,
        storage: &B,
        notifier: &N,
    ) -> Result<ReleaseCheck, WatchError>
    where
        F: ReleaseFetcher + ?Sized,
        B: StorageBackend + ?Sized,
        N: Notifier + ?Sized,
    {
        let declared = fetch_release_date(fetcher, &self.config.release_date_url).await?;
        let stored = self.stored_date(storage).await?;
        info!(declared = %declared, stored = ?stored, "Checked release date");

        if stored.as_deref().map(str::trim) == Some(declared.as_str()) {
            return Ok(ReleaseCheck::UpToDate(declared));
        }

        // The date is stored only once the notice went out
        let notice = ReleaseNotice::new(&self.config, &declared);
        notifier.notify(&notice.subject, &notice.body).await?;
        storage
            .write_file(&self.config.release_date_key, declared.as_bytes())
            .await?;
        info!(date = %declared, "Announced new release");

        Ok(ReleaseCheck::NewRelease(declared))
    }

    async fn stored_date<B: StorageBackend + ?Sized>(
        &self,
        storage: &B,
    ) -> Result<Option<String>, StorageError> {
        match read_text(storage, &self.config.release_date_key).await {
            Ok(date) => Ok(Some(date)),
            Err(StorageError::FileNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
