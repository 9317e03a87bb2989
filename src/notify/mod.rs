//! New-release notification
//!
//! Compares the release date declared upstream with the last date a notice
//! was sent for, and announces releases that have not been seen yet.

pub mod notice;
pub mod watcher;

use async_trait::async_trait;
use tracing::info;

pub use notice::ReleaseNotice;
pub use watcher::{ReleaseCheck, ReleaseWatcher, WatchError};

/// Error type for notification delivery
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Failed to deliver notice: {0}")]
    DeliveryFailed(String),
}

/// Delivers release notices to subscribers
#[async_trait(?Send)]
pub trait Notifier: Send + Sync {
    async fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError>;
}

/// Notifier that writes each notice to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[async_trait(?Send)]
impl Notifier for TracingNotifier {
    async fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        info!(subject, body, "Release notice");
        Ok(())
    }
}
