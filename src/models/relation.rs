//! Relation type model for the SDK

use serde::{Deserialize, Serialize};

/// A `[Typedef]` record, e.g. "part_of" or "regulates"
///
/// Relation types are kept as a flat catalogue. They are not linked to the
/// parent edges of individual terms.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xref: Option<String>,
    #[serde(default)]
    pub is_transitive: bool,
}
