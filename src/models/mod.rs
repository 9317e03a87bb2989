//! Models module for the SDK
//!
//! Defines the typed representation of one ontology release: terms,
//! relation types and the snapshot that holds them.

pub mod relation;
pub mod snapshot;
pub mod term;

pub use relation::RelationType;
pub use snapshot::{
    DATA_VERSION_KEY, FORMAT_VERSION_KEY, NamespaceCount, Snapshot, SnapshotSummary, TermState,
};
pub use term::Term;
