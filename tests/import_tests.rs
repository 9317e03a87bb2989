//! Import module tests

use ontology_changes_sdk::import::{ImportError, OboImporter, parse_document};
use ontology_changes_sdk::models::TermState;

const SAMPLE: &str = "\
format-version: 1.2
data-version: releases/2024-01-17
subsetdef: goslim_generic \"Generic GO slim\"
ontology: go

[Term]
id: GO:0000001
name: mitochondrion inheritance
namespace: biological_process
def: \"The distribution of mitochondria.\" [GOC:mcc, PMID:10873824]
synonym: \"mitochondrial inheritance\" EXACT []
is_a: GO:0048308 ! organelle inheritance
is_a: GO:0048311 ! mitochondrion distribution

[Term]
id: GO:0000006
name: high-affinity zinc transmembrane transporter activity
namespace: molecular_function
alt_id: GO:0000007
alt_id: GO:0000005
subset: goslim_generic
xref: Reactome:R-HSA-442380
comment: Unknown.

[Term]
id: GO:0000008
name: obsolete thioredoxin
namespace: molecular_function
is_obsolete: true

[Typedef]
id: part_of
name: part of
namespace: external
xref: BFO:0000050
is_transitive: true
";

mod obo_import_tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let snapshot = parse_document(SAMPLE).unwrap();
        assert_eq!(snapshot.format_version(), Some("1.2"));
        assert_eq!(snapshot.data_version(), Some("releases/2024-01-17"));
        assert_eq!(
            snapshot.header_value("subsetdef"),
            Some("goslim_generic \"Generic GO slim\"")
        );
    }

    #[test]
    fn test_parse_terms() {
        let result = OboImporter::new().parse(SAMPLE).unwrap();
        assert!(result.errors.is_empty());

        let snapshot = &result.snapshot;
        assert_eq!(snapshot.len(), 3);

        let term = snapshot.get("GO:0000001").unwrap();
        assert_eq!(term.name.as_deref(), Some("mitochondrion inheritance"));
        assert_eq!(term.namespace.as_deref(), Some("biological_process"));
        assert_eq!(
            term.definition.as_deref(),
            Some("\"The distribution of mitochondria.\" [GOC:mcc, PMID:10873824]")
        );
        assert_eq!(term.synonyms, vec!["\"mitochondrial inheritance\" EXACT []"]);
        assert!(!term.is_obsolete);

        let term = snapshot.get("GO:0000006").unwrap();
        assert_eq!(term.subsets, vec!["goslim_generic"]);
        assert_eq!(term.xrefs, vec!["Reactome:R-HSA-442380"]);
        assert_eq!(term.comment.as_deref(), Some("Unknown."));
        assert!(term.parents.is_empty());
    }

    #[test]
    fn test_alt_ids_keep_document_order() {
        let snapshot = parse_document(SAMPLE).unwrap();
        let term = snapshot.get("GO:0000006").unwrap();
        assert_eq!(term.alt_ids, vec!["GO:0000007", "GO:0000005"]);
    }

    #[test]
    fn test_is_a_keeps_only_the_referenced_id() {
        let snapshot = parse_document(SAMPLE).unwrap();
        let term = snapshot.get("GO:0000001").unwrap();
        assert_eq!(term.parents, vec!["GO:0048308", "GO:0048311"]);
    }

    #[test]
    fn test_alternate_ids_are_not_lookup_keys() {
        let snapshot = parse_document(SAMPLE).unwrap();
        assert!(snapshot.has("GO:0000006"));
        assert!(!snapshot.has("GO:0000007"));
        assert!(snapshot.get("GO:0000007").is_none());
    }

    #[test]
    fn test_state_filters() {
        let snapshot = parse_document(SAMPLE).unwrap();
        let ids = |state| snapshot.all(state).map(|t| t.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(TermState::Any), vec!["GO:0000001", "GO:0000006", "GO:0000008"]);
        assert_eq!(ids(TermState::Valid), vec!["GO:0000001", "GO:0000006"]);
        assert_eq!(ids(TermState::Obsolete), vec!["GO:0000008"]);
    }

    #[test]
    fn test_typedef_does_not_leak_into_last_term() {
        let snapshot = parse_document(SAMPLE).unwrap();
        let term = snapshot.get("GO:0000008").unwrap();
        assert_eq!(term.name.as_deref(), Some("obsolete thioredoxin"));
        assert!(term.xrefs.is_empty());
        assert!(term.is_obsolete);
    }

    #[test]
    fn test_parse_typedef() {
        let snapshot = parse_document(SAMPLE).unwrap();
        assert_eq!(snapshot.relations().len(), 1);
        let relation = snapshot.relation("part_of").unwrap();
        assert_eq!(relation.name.as_deref(), Some("part of"));
        assert_eq!(relation.namespace.as_deref(), Some("external"));
        assert_eq!(relation.xref.as_deref(), Some("BFO"));
        assert!(relation.is_transitive);
    }

    #[test]
    fn test_unknown_tags_ignored() {
        let snapshot =
            parse_document("[Term]\nid: GO:1\ncreated_by: someone\nproperty_value: x y\n").unwrap();
        let term = snapshot.get("GO:1").unwrap();
        assert!(term.name.is_none());
        assert!(term.comment.is_none());
    }

    #[test]
    fn test_value_keeps_later_separators() {
        let snapshot = parse_document("[Term]\nid: GO:1\ncomment: Note: see also GO:2.\n").unwrap();
        assert_eq!(
            snapshot.get("GO:1").unwrap().comment.as_deref(),
            Some("Note: see also GO:2.")
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let snapshot =
            parse_document("data-version: v1\r\n\r\n[Term]\r\nid: GO:1\r\nname: foo\r\n").unwrap();
        assert_eq!(snapshot.data_version(), Some("v1"));
        assert_eq!(snapshot.get("GO:1").unwrap().name.as_deref(), Some("foo"));
    }
}

mod obo_error_tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let result = OboImporter::new().parse("");
        assert!(matches!(result, Err(ImportError::MalformedDocument(_))));
    }

    #[test]
    fn test_header_without_terms() {
        let result = parse_document("format-version: 1.2\ndata-version: v1\n");
        assert!(matches!(result, Err(ImportError::MalformedDocument(_))));
    }

    #[test]
    fn test_line_without_separator_is_skipped() {
        let result = OboImporter::new()
            .parse("[Term]\nid: GO:1\nis_obsolete:\nname: foo\n")
            .unwrap();
        let term = result.snapshot.get("GO:1").unwrap();
        assert_eq!(term.name.as_deref(), Some("foo"));
        assert!(!term.is_obsolete);
        assert_eq!(result.skipped_lines(), 1);
        assert_eq!(
            result.errors,
            vec![ImportError::MalformedLine {
                section: "Term",
                record: 1,
                line: "is_obsolete:".to_string(),
            }]
        );
    }

    #[test]
    fn test_term_without_id_is_skipped() {
        let result = OboImporter::new()
            .parse("[Term]\nname: orphan\n[Term]\nid: GO:2\n")
            .unwrap();
        assert_eq!(result.snapshot.len(), 1);
        assert!(result.snapshot.has("GO:2"));
        assert_eq!(result.skipped_records(), 1);
    }

    #[test]
    fn test_typedef_without_id_is_skipped() {
        let result = OboImporter::new()
            .parse(
                "[Term]\nid: GO:1\n\
                 [Typedef]\nname: orphan relation\ntransitive over nothing\n\
                 [Typedef]\nid: part_of\n",
            )
            .unwrap();

        let relations: Vec<_> = result
            .snapshot
            .relations()
            .iter()
            .map(|r| r.id.as_deref())
            .collect();
        assert_eq!(relations, vec![Some("part_of")]);
        assert_eq!(result.skipped_records(), 1);
        assert_eq!(result.skipped_lines(), 1);
        assert_eq!(
            result.errors,
            vec![
                ImportError::MalformedLine {
                    section: "Typedef",
                    record: 1,
                    line: "transitive over nothing".to_string(),
                },
                ImportError::MissingField {
                    section: "Typedef",
                    record: 1,
                    field: "id",
                },
            ]
        );
    }

    #[test]
    fn test_only_terms_without_id() {
        let result = OboImporter::new().parse("[Term]\nname: orphan\n");
        assert!(matches!(result, Err(ImportError::MalformedDocument(_))));
    }
}
