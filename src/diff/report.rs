//! Change report types
//!
//! The report is the structured output of a diff. Its JSON shape is the
//! published artifact, so field names here are part of the wire format.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::Snapshot;

/// Placeholder written wherever a value is absent
pub const NOT_AVAILABLE: &str = "N/A";

/// Release metadata for one side of the diff
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub date: String,
    /// Declared ontology version (`data-version` header)
    pub version: String,
    /// Declared format version (`format-version` header)
    pub format: String,
}

impl ReleaseInfo {
    /// Read the declared versions from the snapshot header
    pub fn from_snapshot(snapshot: &Snapshot, date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            version: snapshot
                .data_version()
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            format: snapshot
                .format_version()
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Releases {
    pub current: ReleaseInfo,
    pub previous: ReleaseInfo,
}

/// Release dates supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDates {
    pub current: String,
    pub previous: String,
}

impl ReleaseDates {
    pub fn new(current: impl Into<String>, previous: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            previous: previous.into(),
        }
    }
}

impl Default for ReleaseDates {
    fn default() -> Self {
        Self::new(NOT_AVAILABLE, NOT_AVAILABLE)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

/// Id and label of an added or removed term
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TermRef {
    pub id: String,
    pub name: Option<String>,
}

/// Term fields compared by the differ, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermField {
    Id,
    IsObsolete,
    AltIds,
    Name,
    Namespace,
    Definition,
    Comment,
    Synonyms,
    Subsets,
    Xrefs,
    IsA,
}

impl TermField {
    pub const ALL: [TermField; 11] = [
        TermField::Id,
        TermField::IsObsolete,
        TermField::AltIds,
        TermField::Name,
        TermField::Namespace,
        TermField::Definition,
        TermField::Comment,
        TermField::Synonyms,
        TermField::Subsets,
        TermField::Xrefs,
        TermField::IsA,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TermField::Id => "id",
            TermField::IsObsolete => "is_obsolete",
            TermField::AltIds => "alt_ids",
            TermField::Name => "name",
            TermField::Namespace => "namespace",
            TermField::Definition => "definition",
            TermField::Comment => "comment",
            TermField::Synonyms => "synonyms",
            TermField::Subsets => "subsets",
            TermField::Xrefs => "xrefs",
            TermField::IsA => "is_a",
        }
    }
}

impl fmt::Display for TermField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of one side of a field change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn not_available() -> Self {
        FieldValue::Text(NOT_AVAILABLE.to_string())
    }
}

impl fmt::Display for FieldValue {
    /// Sequences render comma-space joined
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Flag(flag) => write!(f, "{}", flag),
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldChange {
    pub current: FieldValue,
    pub previous: FieldValue,
}

/// A term present in both releases whose fields differ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModifiedTerm {
    pub id: String,
    pub name: Option<String>,
    pub changes: BTreeMap<TermField, FieldChange>,
}

/// Entries grouped by namespace
///
/// Groups appear in the order their namespace was first seen, entries in
/// insertion order. An absent namespace is a group of its own and
/// serializes under the key `"N/A"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceGroups<T> {
    groups: Vec<(Option<String>, Vec<T>)>,
}

impl<T> Default for NamespaceGroups<T> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<T> NamespaceGroups<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the group of `namespace`, creating it if needed
    pub fn push(&mut self, namespace: Option<&str>, entry: T) {
        match self
            .groups
            .iter_mut()
            .find(|(key, _)| key.as_deref() == namespace)
        {
            Some((_, entries)) => entries.push(entry),
            None => self
                .groups
                .push((namespace.map(str::to_string), vec![entry])),
        }
    }

    pub fn get(&self, namespace: Option<&str>) -> Option<&[T]> {
        self.groups
            .iter()
            .find(|(key, _)| key.as_deref() == namespace)
            .map(|(_, entries)| entries.as_slice())
    }

    /// Groups in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, &[T])> {
        self.groups
            .iter()
            .map(|(key, entries)| (key.as_deref(), entries.as_slice()))
    }

    pub fn namespaces(&self) -> impl Iterator<Item = Option<&str>> {
        self.groups.iter().map(|(key, _)| key.as_deref())
    }

    /// Number of entries across all groups
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|(_, entries)| entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<T: Serialize> Serialize for NamespaceGroups<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // An absent namespace and a literal "N/A" namespace share one key
        let mut merged: Vec<(&str, Vec<&T>)> = Vec::with_capacity(self.groups.len());
        for (namespace, entries) in &self.groups {
            let key = namespace.as_deref().unwrap_or(NOT_AVAILABLE);
            match merged.iter_mut().find(|(existing, _)| *existing == key) {
                Some((_, group)) => group.extend(entries),
                None => merged.push((key, entries.iter().collect())),
            }
        }

        let mut map = serializer.serialize_map(Some(merged.len()))?;
        for (key, entries) in &merged {
            map.serialize_entry(key, entries)?;
        }
        map.end()
    }
}

/// Output of a diff between two releases
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChangeReport {
    pub releases: Releases,
    pub summary: ChangeSummary,
    pub added: NamespaceGroups<TermRef>,
    pub removed: NamespaceGroups<TermRef>,
    pub modified: NamespaceGroups<ModifiedTerm>,
}

impl ChangeReport {
    /// Whether the two releases hold the same terms with the same fields
    pub fn is_unchanged(&self) -> bool {
        self.summary == ChangeSummary::default()
    }
}
