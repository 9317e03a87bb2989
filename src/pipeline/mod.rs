//! Change-tracking run
//!
//! One run fetches the current release, compares it with the newest
//! archived release and publishes the resulting change report. Runs are
//! independent; everything they need is read back from storage.

mod error;

pub use error::{ChangeTrackerError, ChangeTrackerResult};

use std::time::Instant;

use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::config::ChangesConfig;
use crate::diff::{ChangeReport, ReleaseDates, SnapshotDiffer};
use crate::fetch::{ReleaseFetcher, fetch_release_date};
use crate::import::OboImporter;
use crate::models::Snapshot;
use crate::publish::{ReleaseArchive, ReportPublisher};
use crate::storage::StorageBackend;

/// Runs the fetch, archive, diff and publish steps
pub struct ChangeTracker {
    config: ChangesConfig,
}

impl ChangeTracker {
    /// Create a tracker after validating its configuration
    pub fn new(config: ChangesConfig) -> ChangeTrackerResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ChangesConfig {
        &self.config
    }

    /// Run once and return the published report
    ///
    /// Nothing is published when either release fails to parse.
    pub async fn run<F, B>(&self, fetcher: &F, storage: &B) -> ChangeTrackerResult<ChangeReport>
    where
        F: ReleaseFetcher + ?Sized,
        B: StorageBackend + ?Sized,
    {
        let run_id = Uuid::new_v4().to_string();
        let span = info_span!(
            "change_tracking_run",
            run_id = %run_id,
            ontology = %self.config.ontology_label
        );
        self.run_steps(fetcher, storage).instrument(span).await
    }

    async fn run_steps<F, B>(&self, fetcher: &F, storage: &B) -> ChangeTrackerResult<ChangeReport>
    where
        F: ReleaseFetcher + ?Sized,
        B: StorageBackend + ?Sized,
    {
        let start = Instant::now();

        let release_date = fetch_release_date(fetcher, &self.config.release_date_url).await?;
        info!(release_date = %release_date, "Current release date");

        let archive = ReleaseArchive::new(storage, &self.config);
        let previous_release = archive
            .latest_ontology_before(&release_date)
            .await?
            .ok_or_else(|| ChangeTrackerError::NoPreviousRelease(self.config.archive_prefix.clone()))?;
        info!(
            key = %previous_release.key,
            date = %previous_release.date,
            "Last archived release detected"
        );

        let current_text = fetcher.fetch_text(&self.config.ontology_url).await?;
        archive.archive_ontology(&release_date, &current_text).await?;
        let previous_text = archive.read_ontology(&previous_release.key).await?;

        let current = parse_release("current", &current_text)?;
        let previous = parse_release("previous", &previous_text)?;

        let dates = ReleaseDates::new(release_date.as_str(), previous_release.date.as_str());
        let report = SnapshotDiffer::new()
            .with_term_state(self.config.term_state)
            .diff(&current, &previous, &dates);

        let keys = ReportPublisher::new(storage, &self.config)
            .publish(&report, &release_date)
            .await?;

        info!(
            published = keys.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Change tracking run completed"
        );
        Ok(report)
    }
}

fn parse_release(release: &'static str, content: &str) -> ChangeTrackerResult<Snapshot> {
    let result = OboImporter::new()
        .parse(content)
        .map_err(|source| ChangeTrackerError::Import { release, source })?;

    let summary = result.snapshot.summary();
    info!(
        release,
        version = summary.data_version.as_deref().unwrap_or("N/A"),
        valid = summary.valid_terms,
        obsolete = summary.obsolete_terms,
        "Loaded release"
    );
    Ok(result.snapshot)
}
