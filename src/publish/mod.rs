//! Publishing functionality
//!
//! Persists releases and change reports through a storage backend:
//! - ReleaseArchive: dated copies of each ontology release
//! - ReportPublisher: the latest and archived change reports

pub mod archive;
pub mod publisher;

pub use archive::{ArchivedRelease, ReleaseArchive};
pub use publisher::ReportPublisher;
