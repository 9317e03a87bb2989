//! Export module tests

use ontology_changes_sdk::diff::{ReleaseDates, SnapshotDiffer};
use ontology_changes_sdk::export::{JsonReportExporter, TsvReportExporter};
use ontology_changes_sdk::import::parse_document;

const PREVIOUS: &str = "\
format-version: 1.2
data-version: releases/2023-12-01

[Term]
id: GO:0000001
name: mitochondrion inheritance
namespace: biological_process
synonym: \"mitochondrial inheritance\" EXACT []

[Term]
id: GO:0000003
name: reproduction
namespace: biological_process

[Term]
id: GO:0000009
namespace: cellular_component
";

const CURRENT: &str = "\
format-version: 1.2
data-version: releases/2024-01-17

[Term]
id: GO:0000001
name: mitochondrion inheritance
namespace: biological_process
alt_id: GO:0000010
synonym: \"mitochondrial inheritance\" EXACT []
synonym: \"mito inheritance\" NARROW []
is_obsolete: true

[Term]
id: GO:0000006
name: zinc transporter activity
namespace: molecular_function

[Term]
id: GO:0000011
";

fn report() -> ontology_changes_sdk::diff::ChangeReport {
    let current = parse_document(CURRENT).unwrap();
    let previous = parse_document(PREVIOUS).unwrap();
    SnapshotDiffer::new().diff(
        &current,
        &previous,
        &ReleaseDates::new("2024-01-17", "2023-12-01"),
    )
}

mod tsv_export_tests {
    use super::*;

    #[test]
    fn test_tabular_layout() {
        let text = TsvReportExporter::default().to_tabular(&report());
        let expected = "\
CHANGES IN GO BETWEEN releases/2024-01-17 (2024-01-17) and releases/2023-12-01 (2023-12-01)

TERMS ADDED\t2
molecular_function\tGO:0000006\tzinc transporter activity
N/A\tGO:0000011\tN/A

TERMS REMOVED\t2
biological_process\tGO:0000003\treproduction
cellular_component\tGO:0000009\tN/A

TERMS MODIFIED\t1
biological_process\tGO:0000001\tmitochondrion inheritance\
\tis_obsolete (current: true previous: false)\
\talt_ids (current: GO:0000010 previous: N/A)\
\tsynonyms (current: \"mitochondrial inheritance\" EXACT [], \"mito inheritance\" NARROW [] previous: \"mitochondrial inheritance\" EXACT [])
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_export_result() {
        let result = TsvReportExporter::new("GO").export(&report()).unwrap();
        assert_eq!(result.format, "tsv");
        assert_eq!(result.content_type(), "text/plain");
        assert!(result.content.ends_with('\n'));
    }
}

mod json_export_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_is_the_report() {
        let report = report();
        let exporter = JsonReportExporter::new();
        assert_eq!(exporter.to_structured(&report), &report);
    }

    #[test]
    fn test_structured_layout() {
        let value = JsonReportExporter::new().to_value(&report()).unwrap();
        assert_eq!(value["summary"], json!({"added": 2, "removed": 2, "modified": 1}));
        assert_eq!(
            value["added"]["N/A"],
            json!([{"id": "GO:0000011", "name": null}])
        );
        assert_eq!(
            value["modified"]["biological_process"][0]["changes"],
            json!({
                "is_obsolete": {"current": true, "previous": false},
                "alt_ids": {"current": ["GO:0000010"], "previous": "N/A"},
                "synonyms": {
                    "current": [
                        "\"mitochondrial inheritance\" EXACT []",
                        "\"mito inheritance\" NARROW []"
                    ],
                    "previous": ["\"mitochondrial inheritance\" EXACT []"]
                }
            })
        );
    }

    #[test]
    fn test_compact_and_pretty() {
        let report = report();
        let compact = JsonReportExporter::new().export(&report).unwrap();
        let pretty = JsonReportExporter::pretty().export(&report).unwrap();
        assert_eq!(compact.format, "json");
        assert_eq!(compact.content_type(), "application/json");
        assert!(!compact.content.contains('\n'));
        assert!(pretty.content.contains("\n  \"releases\""));

        let a: serde_json::Value = serde_json::from_str(&compact.content).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty.content).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_placeholder_namespace_keeps_every_entry() {
        let current = parse_document(
            "[Term]\nid: GO:1\nnamespace: N/A\n[Term]\nid: GO:2\n",
        )
        .unwrap();
        let previous = parse_document("[Term]\nid: GO:3\nnamespace: N/A\n").unwrap();
        let report = SnapshotDiffer::new().diff(&current, &previous, &ReleaseDates::default());
        assert_eq!(report.summary.added, 2);

        let value = JsonReportExporter::new().to_value(&report).unwrap();
        assert_eq!(
            value["added"],
            json!({"N/A": [{"id": "GO:1", "name": null}, {"id": "GO:2", "name": null}]})
        );
        let entries: usize = value["added"]
            .as_object()
            .unwrap()
            .values()
            .map(|group| group.as_array().unwrap().len())
            .sum();
        assert_eq!(entries, report.summary.added);
    }

    #[test]
    fn test_json_keys_keep_namespace_order() {
        let content = JsonReportExporter::new().export(&report()).unwrap().content;
        let molecular = content.find("\"molecular_function\"").unwrap();
        let absent = content.find("\"N/A\":[").unwrap();
        assert!(molecular < absent);
    }
}
