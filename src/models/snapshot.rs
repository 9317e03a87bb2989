//! Snapshot model: every term and relation type parsed from one document
//!
//! A snapshot is built once by the importer and is read-only afterwards.
//! Lookups are exact on the primary id; alternate ids are data, not keys.

use super::relation::RelationType;
use super::term::Term;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

/// Header key holding the declared ontology release
pub const DATA_VERSION_KEY: &str = "data-version";
/// Header key holding the declared OBO format version
pub const FORMAT_VERSION_KEY: &str = "format-version";

/// Filter applied when listing the terms of a snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum TermState {
    /// Every term, obsolete or not
    #[default]
    Any,
    /// Only terms with `is_obsolete == false`
    Valid,
    /// Only terms with `is_obsolete == true`
    Obsolete,
}

impl TermState {
    pub fn matches(self, term: &Term) -> bool {
        match self {
            TermState::Any => true,
            TermState::Valid => !term.is_obsolete,
            TermState::Obsolete => term.is_obsolete,
        }
    }
}

impl FromStr for TermState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" => Ok(TermState::Any),
            "valid" => Ok(TermState::Valid),
            "obsolete" => Ok(TermState::Obsolete),
            _ => Err(format!(
                "Unknown term state '{}'. Expected one of: any, valid, obsolete",
                s
            )),
        }
    }
}

/// Parsed ontology release
///
/// Terms keep the order in which the document declared them. That order is
/// what the differ walks, so report buckets come out in document order.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    header: BTreeMap<String, String>,
    terms: Vec<Term>,
    term_index: HashMap<String, usize>,
    relations: Vec<RelationType>,
    relation_index: HashMap<String, usize>,
}

impl Snapshot {
    /// Build a snapshot from already parsed parts
    ///
    /// A term whose id was seen before replaces the earlier term but keeps
    /// the earlier position. Relation types behave the same way.
    pub fn new(
        header: BTreeMap<String, String>,
        terms: impl IntoIterator<Item = Term>,
        relations: impl IntoIterator<Item = RelationType>,
    ) -> Self {
        let mut snapshot = Self {
            header,
            ..Self::default()
        };
        for term in terms {
            snapshot.insert_term(term);
        }
        for relation in relations {
            snapshot.insert_relation(relation);
        }
        snapshot
    }

    fn insert_term(&mut self, term: Term) {
        match self.term_index.get(&term.id) {
            Some(&position) => self.terms[position] = term,
            None => {
                self.term_index.insert(term.id.clone(), self.terms.len());
                self.terms.push(term);
            }
        }
    }

    fn insert_relation(&mut self, relation: RelationType) {
        let Some(id) = relation.id.clone() else {
            self.relations.push(relation);
            return;
        };
        match self.relation_index.get(&id) {
            Some(&position) => self.relations[position] = relation,
            None => {
                self.relation_index.insert(id, self.relations.len());
                self.relations.push(relation);
            }
        }
    }

    /// Header metadata found before the first `[Term]` stanza
    pub fn header(&self) -> &BTreeMap<String, String> {
        &self.header
    }

    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.header.get(key).map(String::as_str)
    }

    /// Declared release, e.g. "releases/2024-01-17"
    pub fn data_version(&self) -> Option<&str> {
        self.header_value(DATA_VERSION_KEY)
    }

    pub fn format_version(&self) -> Option<&str> {
        self.header_value(FORMAT_VERSION_KEY)
    }

    /// Whether a term with exactly this id exists
    pub fn has(&self, id: &str) -> bool {
        self.term_index.contains_key(id)
    }

    /// Look up a term by exact id. `None` means the snapshot does not hold it.
    pub fn get(&self, id: &str) -> Option<&Term> {
        self.term_index.get(id).map(|&position| &self.terms[position])
    }

    /// Terms matching `state`, in document order
    ///
    /// Each yielded term carries its own id, so the iterator stands in for an
    /// id → term mapping without copying the snapshot.
    pub fn all(&self, state: TermState) -> impl Iterator<Item = &Term> + '_ {
        self.terms.iter().filter(move |term| state.matches(term))
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn relation(&self, id: &str) -> Option<&RelationType> {
        self.relation_index
            .get(id)
            .map(|&position| &self.relations[position])
    }

    pub fn relations(&self) -> &[RelationType] {
        &self.relations
    }

    /// Aggregate counts over the snapshot
    pub fn summary(&self) -> SnapshotSummary {
        let mut namespaces: Vec<NamespaceCount> = Vec::new();
        for term in self.all(TermState::Valid) {
            match namespaces
                .iter_mut()
                .find(|count| count.namespace == term.namespace)
            {
                Some(count) => count.terms += 1,
                None => namespaces.push(NamespaceCount {
                    namespace: term.namespace.clone(),
                    terms: 1,
                }),
            }
        }

        let obsolete_terms = self.all(TermState::Obsolete).count();
        SnapshotSummary {
            data_version: self.data_version().map(str::to_string),
            format_version: self.format_version().map(str::to_string),
            total_terms: self.terms.len(),
            valid_terms: self.terms.len() - obsolete_terms,
            obsolete_terms,
            namespaces,
            relation_types: self.relations.len(),
        }
    }
}

/// Number of valid terms declared under one namespace
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamespaceCount {
    pub namespace: Option<String>,
    pub terms: usize,
}

/// Counts describing a snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_version: Option<String>,
    pub total_terms: usize,
    pub valid_terms: usize,
    pub obsolete_terms: usize,
    /// Valid terms per namespace, in first-seen order
    pub namespaces: Vec<NamespaceCount>,
    pub relation_types: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        let mut header = BTreeMap::new();
        header.insert(DATA_VERSION_KEY.to_string(), "releases/2024-01-17".to_string());
        Snapshot::new(
            header,
            vec![
                Term::new("GO:1").with_namespace("biological_process"),
                Term::new("GO:2").with_namespace("cellular_component").obsolete(),
                Term::new("GO:3").with_namespace("biological_process"),
            ],
            vec![RelationType {
                id: Some("part_of".to_string()),
                is_transitive: true,
                ..RelationType::default()
            }],
        )
    }

    #[test]
    fn test_lookup_is_exact() {
        let snapshot = sample();
        assert!(snapshot.has("GO:1"));
        assert!(!snapshot.has("GO:0000001"));
        assert!(snapshot.get("GO:4").is_none());
        assert_eq!(snapshot.get("GO:3").unwrap().id, "GO:3");
    }

    #[test]
    fn test_state_filters() {
        let snapshot = sample();
        assert_eq!(snapshot.all(TermState::Any).count(), 3);
        let valid: Vec<&str> = snapshot
            .all(TermState::Valid)
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(valid, vec!["GO:1", "GO:3"]);
        let obsolete: Vec<&str> = snapshot
            .all(TermState::Obsolete)
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(obsolete, vec!["GO:2"]);
    }

    #[test]
    fn test_duplicate_id_keeps_first_position() {
        let snapshot = Snapshot::new(
            BTreeMap::new(),
            vec![
                Term::new("GO:1").with_name("first"),
                Term::new("GO:2"),
                Term::new("GO:1").with_name("second"),
            ],
            Vec::new(),
        );
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.terms()[0].name.as_deref(), Some("second"));
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(summary.total_terms, 3);
        assert_eq!(summary.valid_terms, 2);
        assert_eq!(summary.obsolete_terms, 1);
        assert_eq!(summary.namespaces.len(), 1);
        assert_eq!(summary.namespaces[0].terms, 2);
        assert_eq!(summary.relation_types, 1);
        assert_eq!(summary.data_version.as_deref(), Some("releases/2024-01-17"));
        assert!(summary.format_version.is_none());
    }

    #[test]
    fn test_term_state_from_str() {
        assert_eq!("VALID".parse::<TermState>().unwrap(), TermState::Valid);
        assert!("alive".parse::<TermState>().is_err());
    }
}
