//! Output formatting for CLI

use crate::diff::ChangeReport;
use crate::import::ImportResult;
use crate::models::NamespaceCount;
use std::path::Path;

/// Describe a parsed document
pub fn format_summary(path: &Path, result: &ImportResult) -> String {
    let summary = result.snapshot.summary();
    let mut output = format!("{}\n", path.display());

    output.push_str(&format!(
        "  data-version:   {}\n",
        summary.data_version.as_deref().unwrap_or("N/A")
    ));
    output.push_str(&format!(
        "  format-version: {}\n",
        summary.format_version.as_deref().unwrap_or("N/A")
    ));
    output.push_str(&format!(
        "  terms:          {} ({} valid, {} obsolete)\n",
        summary.total_terms, summary.valid_terms, summary.obsolete_terms
    ));
    output.push_str(&format!("  relation types: {}\n", summary.relation_types));

    if !summary.namespaces.is_empty() {
        output.push_str("  namespaces:\n");
        for NamespaceCount { namespace, terms } in &summary.namespaces {
            output.push_str(&format!(
                "    {:<30} {}\n",
                namespace.as_deref().unwrap_or("N/A"),
                terms
            ));
        }
    }

    if !result.errors.is_empty() {
        output.push_str(&format!("  skipped ({}):\n", result.errors.len()));
        for error in &result.errors {
            output.push_str(&format!("    - {}\n", error));
        }
    }

    output
}

/// One-line count of a report, for stderr
pub fn format_change_counts(report: &ChangeReport) -> String {
    format!(
        "{} added, {} removed, {} modified",
        report.summary.added, report.summary.removed, report.summary.modified
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::OboImporter;

    #[test]
    fn test_format_summary() {
        let result = OboImporter::new()
            .parse(
                "data-version: releases/2024-01-17\n\
                 [Term]\nid: GO:1\nnamespace: biological_process\n\
                 [Term]\nid: GO:2\nis_obsolete: true\n\
                 [Term]\nname: orphan\n",
            )
            .unwrap();
        let text = format_summary(Path::new("go.obo"), &result);
        assert!(text.starts_with("go.obo\n"));
        assert!(text.contains("data-version:   releases/2024-01-17"));
        assert!(text.contains("format-version: N/A"));
        assert!(text.contains("terms:          2 (1 valid, 1 obsolete)"));
        assert!(text.contains("biological_process"));
        assert!(text.contains("skipped (1):"));
    }
}
