//! Ontology Changes SDK - track what changed between ontology releases
//!
//! Provides unified interfaces for:
//! - OBO parsing into read-only snapshots
//! - Snapshot diffing (added, removed and modified terms)
//! - Report rendering (JSON and TSV)
//! - Release fetching, archiving and report publishing (via storage backends)
//! - New-release notification

pub mod cli;
pub mod config;
pub mod diff;
pub mod export;
pub mod fetch;
pub mod import;
pub mod models;
pub mod notify;
pub mod pipeline;
pub mod publish;
pub mod storage;

// Re-export commonly used types
pub use config::{ChangesConfig, ConfigError};
pub use storage::{MemoryStorageBackend, StorageBackend, StorageError};
#[cfg(feature = "native-fs")]
pub use storage::filesystem::FileSystemStorageBackend;

pub use fetch::{FetchError, ReleaseFetcher};
#[cfg(feature = "api-backend")]
pub use fetch::HttpReleaseFetcher;

pub use import::{ImportError, ImportResult, OboImporter, parse_document};
pub use export::{ExportError, ExportResult, JsonReportExporter, TsvReportExporter};
pub use diff::{ChangeReport, ReleaseDates, SnapshotDiffer, diff_snapshots};
pub use notify::{Notifier, ReleaseCheck, ReleaseWatcher, TracingNotifier};
pub use pipeline::{ChangeTracker, ChangeTrackerError};
pub use publish::{ReleaseArchive, ReportPublisher};

// Re-export models
pub use models::{RelationType, Snapshot, SnapshotSummary, Term, TermState};
