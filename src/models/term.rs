//! Term model for the SDK

use serde::{Deserialize, Serialize};

/// One ontology concept parsed from a `[Term]` stanza
///
/// Sequence fields keep the order in which their tags appeared in the
/// document. Absent optional fields stay `None`, which is distinct from an
/// empty string.
///
/// # Example
///
/// ```rust
/// use ontology_changes_sdk::models::Term;
///
/// let term = Term::new("GO:0008150").with_name("biological_process");
/// assert_eq!(term.name.as_deref(), Some("biological_process"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Term {
    /// Stable identifier, unique within a snapshot
    pub id: String,
    /// Identifiers that historically referred to this term
    #[serde(default)]
    pub alt_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Aspect the term belongs to (e.g. "biological_process")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub is_obsolete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub subsets: Vec<String>,
    #[serde(default)]
    pub xrefs: Vec<String>,
    /// Parent term ids from `is_a` lines, labels stripped
    #[serde(default)]
    pub parents: Vec<String>,
}

impl Term {
    /// Create a term with only its identifier set
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            alt_ids: Vec::new(),
            name: None,
            namespace: None,
            is_obsolete: false,
            definition: None,
            comment: None,
            synonyms: Vec::new(),
            subsets: Vec::new(),
            xrefs: Vec::new(),
            parents: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parents.push(parent.into());
        self
    }

    pub fn obsolete(mut self) -> Self {
        self.is_obsolete = true;
        self
    }
}
