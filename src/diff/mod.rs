//! Differencing between two ontology releases
//!
//! Classifies every term as added, removed or modified and, for modified
//! terms, lists the fields that changed. Terms are matched on their primary
//! id only; alternate ids never take part in matching.
//!
//! ## Example
//!
//! ```rust
//! use ontology_changes_sdk::diff::{ReleaseDates, SnapshotDiffer};
//! use ontology_changes_sdk::import::parse_document;
//!
//! let current = parse_document("[Term]\nid: GO:1\nname: foo\n").unwrap();
//! let previous = parse_document("[Term]\nid: GO:1\nname: bar\n").unwrap();
//!
//! let report = SnapshotDiffer::new().diff(&current, &previous, &ReleaseDates::default());
//! assert_eq!(report.summary.modified, 1);
//! ```

mod report;

pub use report::{
    ChangeReport, ChangeSummary, FieldChange, FieldValue, ModifiedTerm, NOT_AVAILABLE,
    NamespaceGroups, ReleaseDates, ReleaseInfo, Releases, TermField, TermRef,
};

use crate::models::{Snapshot, Term, TermState};
use std::collections::BTreeMap;
use tracing::info;

/// Computes change reports between a current and a previous snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotDiffer {
    term_state: TermState,
}

impl SnapshotDiffer {
    /// Differ walking every term, obsolete ones included
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the terms that drive each pass
    ///
    /// Existence checks against the other snapshot still see every term.
    pub fn with_term_state(mut self, term_state: TermState) -> Self {
        self.term_state = term_state;
        self
    }

    pub fn term_state(&self) -> TermState {
        self.term_state
    }

    /// Diff `current` against `previous`
    ///
    /// Never fails: every field is comparable, absence included. Entries in
    /// each namespace bucket follow the driving snapshot's document order.
    pub fn diff(
        &self,
        current: &Snapshot,
        previous: &Snapshot,
        dates: &ReleaseDates,
    ) -> ChangeReport {
        let mut summary = ChangeSummary::default();

        let mut added = NamespaceGroups::new();
        for term in current.all(self.term_state) {
            if !previous.has(&term.id) {
                added.push(term.namespace.as_deref(), term_ref(term));
                summary.added += 1;
            }
        }
        info!("{} terms added since last revision", summary.added);

        let mut removed = NamespaceGroups::new();
        for term in previous.all(self.term_state) {
            if !current.has(&term.id) {
                removed.push(term.namespace.as_deref(), term_ref(term));
                summary.removed += 1;
            }
        }
        info!("{} terms removed since last revision", summary.removed);

        let mut modified = NamespaceGroups::new();
        for term in current.all(self.term_state) {
            let Some(old) = previous.get(&term.id) else {
                continue;
            };
            let changes = explain_differences(term, old);
            if changes.is_empty() {
                continue;
            }
            modified.push(
                term.namespace.as_deref(),
                ModifiedTerm {
                    id: term.id.clone(),
                    name: term.name.clone(),
                    changes,
                },
            );
            summary.modified += 1;
        }
        info!("{} terms modified since last revision", summary.modified);

        ChangeReport {
            releases: Releases {
                current: ReleaseInfo::from_snapshot(current, dates.current.as_str()),
                previous: ReleaseInfo::from_snapshot(previous, dates.previous.as_str()),
            },
            summary,
            added,
            removed,
            modified,
        }
    }
}

/// Diff two snapshots with the default differ and unknown release dates
pub fn diff_snapshots(current: &Snapshot, previous: &Snapshot) -> ChangeReport {
    SnapshotDiffer::new().diff(current, previous, &ReleaseDates::default())
}

/// Every compared field on which the two versions of a term disagree
pub fn explain_differences(current: &Term, previous: &Term) -> BTreeMap<TermField, FieldChange> {
    TermField::ALL
        .iter()
        .filter_map(|&field| compare_field(field, current, previous).map(|change| (field, change)))
        .collect()
}

fn term_ref(term: &Term) -> TermRef {
    TermRef {
        id: term.id.clone(),
        name: term.name.clone(),
    }
}

fn compare_field(field: TermField, current: &Term, previous: &Term) -> Option<FieldChange> {
    match field {
        TermField::Id => text_change(Some(current.id.as_str()), Some(previous.id.as_str())),
        TermField::IsObsolete => (current.is_obsolete != previous.is_obsolete).then(|| {
            FieldChange {
                current: FieldValue::Flag(current.is_obsolete),
                previous: FieldValue::Flag(previous.is_obsolete),
            }
        }),
        TermField::AltIds => list_change(&current.alt_ids, &previous.alt_ids),
        TermField::Name => text_change(current.name.as_deref(), previous.name.as_deref()),
        TermField::Namespace => {
            text_change(current.namespace.as_deref(), previous.namespace.as_deref())
        }
        TermField::Definition => {
            text_change(current.definition.as_deref(), previous.definition.as_deref())
        }
        TermField::Comment => text_change(current.comment.as_deref(), previous.comment.as_deref()),
        TermField::Synonyms => list_change(&current.synonyms, &previous.synonyms),
        TermField::Subsets => list_change(&current.subsets, &previous.subsets),
        TermField::Xrefs => list_change(&current.xrefs, &previous.xrefs),
        TermField::IsA => list_change(&current.parents, &previous.parents),
    }
}

fn text_change(current: Option<&str>, previous: Option<&str>) -> Option<FieldChange> {
    (current != previous).then(|| FieldChange {
        current: text_value(current),
        previous: text_value(previous),
    })
}

/// Sequences compare in order, so a reordering alone is a change
fn list_change(current: &[String], previous: &[String]) -> Option<FieldChange> {
    (current != previous).then(|| FieldChange {
        current: list_value(current),
        previous: list_value(previous),
    })
}

fn text_value(value: Option<&str>) -> FieldValue {
    match value {
        Some(text) => FieldValue::Text(text.to_string()),
        None => FieldValue::not_available(),
    }
}

fn list_value(values: &[String]) -> FieldValue {
    if values.is_empty() {
        FieldValue::not_available()
    } else {
        FieldValue::List(values.to_vec())
    }
}
