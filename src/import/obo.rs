//! OBO Import functionality
//!
//! Parses the line-oriented OBO format. The grammar is loose: unknown tags
//! are ignored, and lines or stanzas that cannot be interpreted are skipped
//! and reported rather than failing the whole document.

use super::{ImportError, ImportResult};
use crate::models::{RelationType, Snapshot, Term};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Marker opening a term stanza
pub const TERM_MARKER: &str = "[Term]";
/// Marker opening a relation type stanza
pub const TYPEDEF_MARKER: &str = "[Typedef]";

const TERM_SECTION: &str = "Term";
const TYPEDEF_SECTION: &str = "Typedef";

/// Colon followed by whitespace, separating a tag from its value
static TAG_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r":\s").unwrap());

/// Term fields the parser populates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TermTag {
    Id,
    AltId,
    Namespace,
    Name,
    Comment,
    Def,
    Synonym,
    Subset,
    IsObsolete,
    Xref,
    IsA,
}

/// Tag prefixes in match order. "namespace" must come before "name".
const TERM_TAGS: [(&str, TermTag); 11] = [
    ("id", TermTag::Id),
    ("alt_id", TermTag::AltId),
    ("namespace", TermTag::Namespace),
    ("name", TermTag::Name),
    ("comment", TermTag::Comment),
    ("def", TermTag::Def),
    ("synonym", TermTag::Synonym),
    ("subset", TermTag::Subset),
    ("is_obsolete", TermTag::IsObsolete),
    ("xref", TermTag::Xref),
    ("is_a", TermTag::IsA),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypedefTag {
    Id,
    Namespace,
    Name,
    Xref,
    IsTransitive,
}

const TYPEDEF_TAGS: [(&str, TypedefTag); 5] = [
    ("id", TypedefTag::Id),
    ("namespace", TypedefTag::Namespace),
    ("name", TypedefTag::Name),
    ("xref", TypedefTag::Xref),
    ("is_transitive", TypedefTag::IsTransitive),
];

impl TermTag {
    fn classify(tag: &str) -> Option<Self> {
        TERM_TAGS
            .iter()
            .find(|(prefix, _)| tag.starts_with(prefix))
            .map(|(_, tag)| *tag)
    }
}

impl TypedefTag {
    fn classify(line: &str) -> Option<Self> {
        TYPEDEF_TAGS
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix))
            .map(|(_, tag)| *tag)
    }
}

/// OBO Importer - parses an ontology release into a snapshot
#[derive(Debug, Default)]
pub struct OboImporter;

impl OboImporter {
    /// Create a new OBO importer
    pub fn new() -> Self {
        Self
    }

    /// Parse an OBO document
    ///
    /// Fails with [`ImportError::MalformedDocument`] only when the text holds
    /// no term stanza at all. Skipped lines and stanzas are listed in
    /// [`ImportResult::errors`].
    pub fn parse(&self, content: &str) -> Result<ImportResult, ImportError> {
        if content.trim().is_empty() {
            return Err(ImportError::MalformedDocument(
                "document is empty".to_string(),
            ));
        }

        let mut sections = content.split(TERM_MARKER);
        let header_text = sections.next().unwrap_or_default();
        let term_chunks: Vec<&str> = sections.collect();
        if term_chunks.is_empty() {
            return Err(ImportError::MalformedDocument(format!(
                "no {} stanza found",
                TERM_MARKER
            )));
        }

        let mut errors = Vec::new();
        let header = parse_header(header_text);

        let mut terms = Vec::with_capacity(term_chunks.len());
        for (index, chunk) in term_chunks.iter().enumerate() {
            if let Some(term) = parse_term(chunk, index + 1, &mut errors) {
                terms.push(term);
            }
        }
        if terms.is_empty() {
            return Err(ImportError::MalformedDocument(
                "no term stanza declared an id".to_string(),
            ));
        }

        let mut relations = Vec::new();
        for (index, chunk) in content.split(TYPEDEF_MARKER).skip(1).enumerate() {
            if let Some(relation) = parse_typedef(chunk, index + 1, &mut errors) {
                relations.push(relation);
            }
        }

        let snapshot = Snapshot::new(header, terms, relations);
        let result = ImportResult { snapshot, errors };

        if result.skipped_records() > 0 {
            warn!(
                "Skipped {} stanza(s) without an id",
                result.skipped_records()
            );
        }
        info!(
            terms = result.snapshot.len(),
            relation_types = result.snapshot.relations().len(),
            skipped_lines = result.skipped_lines(),
            "Parsed OBO document"
        );

        Ok(result)
    }
}

/// Parse an OBO document and keep only the snapshot
pub fn parse_document(content: &str) -> Result<Snapshot, ImportError> {
    OboImporter::new().parse(content).map(|result| result.snapshot)
}

/// Split a line on its first colon-whitespace separator
fn split_tag(line: &str) -> Option<(&str, &str)> {
    TAG_SEPARATOR
        .find(line)
        .map(|m| (line[..m.start()].trim(), line[m.end()..].trim()))
}

/// Lines of a chunk with line endings and blank lines removed
fn content_lines(chunk: &str) -> impl Iterator<Item = &str> {
    chunk
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
}

fn parse_header(text: &str) -> BTreeMap<String, String> {
    let mut header = BTreeMap::new();
    for line in content_lines(text) {
        // A stanza other than [Term] ends the header too
        if line.starts_with('[') {
            break;
        }
        if let Some((key, value)) = split_tag(line) {
            header.insert(key.to_string(), value.to_string());
        }
    }
    header
}

fn parse_term(chunk: &str, record: usize, errors: &mut Vec<ImportError>) -> Option<Term> {
    let mut id: Option<String> = None;
    let mut term = Term::new(String::new());

    for line in content_lines(chunk) {
        if line.starts_with(TYPEDEF_MARKER) {
            break;
        }

        let Some((tag, value)) = split_tag(line) else {
            debug!(record, line, "Term line without separator");
            errors.push(ImportError::MalformedLine {
                section: TERM_SECTION,
                record,
                line: line.to_string(),
            });
            continue;
        };

        let Some(tag) = TermTag::classify(tag) else {
            continue;
        };
        let value = value.to_string();
        match tag {
            TermTag::Id => id = Some(value),
            TermTag::AltId => term.alt_ids.push(value),
            TermTag::Namespace => term.namespace = Some(value),
            TermTag::Name => term.name = Some(value),
            TermTag::Comment => term.comment = Some(value),
            TermTag::Def => term.definition = Some(value),
            TermTag::Synonym => term.synonyms.push(value),
            TermTag::Subset => term.subsets.push(value),
            TermTag::IsObsolete => term.is_obsolete = value == "true",
            TermTag::Xref => term.xrefs.push(value),
            TermTag::IsA => {
                let parent = value.split(" ! ").next().unwrap_or_default().trim();
                term.parents.push(parent.to_string());
            }
        }
    }

    match id {
        Some(id) => {
            term.id = id;
            Some(term)
        }
        None => {
            warn!(record, "Term stanza without id skipped");
            errors.push(ImportError::MissingField {
                section: TERM_SECTION,
                record,
                field: "id",
            });
            None
        }
    }
}

/// Typedef lines use a plain colon split: the value is the text between the
/// first and the second colon.
fn parse_typedef(
    chunk: &str,
    record: usize,
    errors: &mut Vec<ImportError>,
) -> Option<RelationType> {
    let mut relation = RelationType::default();

    for line in content_lines(chunk) {
        if line.starts_with(TERM_MARKER) {
            break;
        }

        let Some(value) = line.split(':').nth(1) else {
            errors.push(ImportError::MalformedLine {
                section: TYPEDEF_SECTION,
                record,
                line: line.to_string(),
            });
            continue;
        };
        let value = value.trim().to_string();

        match TypedefTag::classify(line) {
            Some(TypedefTag::Id) => relation.id = Some(value),
            Some(TypedefTag::Namespace) => relation.namespace = Some(value),
            Some(TypedefTag::Name) => relation.name = Some(value),
            Some(TypedefTag::Xref) => relation.xref = Some(value),
            Some(TypedefTag::IsTransitive) => relation.is_transitive = value == "true",
            None => {}
        }
    }

    if relation.id.is_none() {
        warn!(record, "Typedef stanza without id skipped");
        errors.push(ImportError::MissingField {
            section: TYPEDEF_SECTION,
            record,
            field: "id",
        });
        return None;
    }
    Some(relation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tag_uses_first_separator() {
        assert_eq!(
            split_tag("def: \"a: b\" [GOC:go_curators]"),
            Some(("def", "\"a: b\" [GOC:go_curators]"))
        );
        assert_eq!(split_tag("xref:Reactome"), None);
    }

    #[test]
    fn test_classify_prefers_namespace_over_name() {
        assert_eq!(TermTag::classify("namespace"), Some(TermTag::Namespace));
        assert_eq!(TermTag::classify("name"), Some(TermTag::Name));
        assert_eq!(TermTag::classify("is_obsolete"), Some(TermTag::IsObsolete));
        assert_eq!(TermTag::classify("is_a"), Some(TermTag::IsA));
        assert_eq!(TermTag::classify("relationship"), None);
        assert_eq!(TermTag::classify("created_by"), None);
    }

    #[test]
    fn test_header_later_keys_overwrite() {
        let header = parse_header("format-version: 1.2\nremark: one\nremark: two\nno separator\n");
        assert_eq!(header.get("format-version").map(String::as_str), Some("1.2"));
        assert_eq!(header.get("remark").map(String::as_str), Some("two"));
        assert_eq!(header.len(), 2);
    }

    #[test]
    fn test_term_stops_at_typedef_marker() {
        let mut errors = Vec::new();
        let term = parse_term(
            "\nid: GO:1\nname: first\n\n[Typedef]\nid: part_of\nname: part of\n",
            1,
            &mut errors,
        )
        .unwrap();
        assert_eq!(term.id, "GO:1");
        assert_eq!(term.name.as_deref(), Some("first"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_typedef_plain_colon_split() {
        let mut errors = Vec::new();
        let relation = parse_typedef(
            "\nid: part_of\nname: part of\nnamespace: external\nxref: BFO:0000050\nis_transitive: true\n",
            1,
            &mut errors,
        )
        .unwrap();
        assert_eq!(relation.id.as_deref(), Some("part_of"));
        assert_eq!(relation.name.as_deref(), Some("part of"));
        assert_eq!(relation.namespace.as_deref(), Some("external"));
        // Only the text up to the next colon survives
        assert_eq!(relation.xref.as_deref(), Some("BFO"));
        assert!(relation.is_transitive);
    }
}
