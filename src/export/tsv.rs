//! TSV report exporter
//!
//! Flattens a change report into tab-separated lines: one heading per
//! section followed by one line per term. Modified terms carry one extra
//! column per changed field.

use super::{ExportError, ExportResult};
use crate::diff::{ChangeReport, NOT_AVAILABLE, NamespaceGroups, TermRef};

/// Format identifier of TSV exports
pub const FORMAT: &str = "tsv";

/// Label used in the title line when none is configured
pub const DEFAULT_ONTOLOGY_LABEL: &str = "GO";

/// Renders the tabular form of a change report
#[derive(Debug, Clone)]
pub struct TsvReportExporter {
    /// Ontology name shown in the title line
    pub ontology_label: String,
}

impl Default for TsvReportExporter {
    fn default() -> Self {
        Self {
            ontology_label: DEFAULT_ONTOLOGY_LABEL.to_string(),
        }
    }
}

impl TsvReportExporter {
    pub fn new(ontology_label: impl Into<String>) -> Self {
        Self {
            ontology_label: ontology_label.into(),
        }
    }

    pub fn to_tabular(&self, report: &ChangeReport) -> String {
        let current = &report.releases.current;
        let previous = &report.releases.previous;

        let mut output = format!(
            "CHANGES IN {} BETWEEN {} ({}) and {} ({})\n",
            self.ontology_label, current.version, current.date, previous.version, previous.date
        );

        output.push_str(&format!("\nTERMS ADDED\t{}\n", report.summary.added));
        push_term_refs(&mut output, &report.added);

        output.push_str(&format!("\nTERMS REMOVED\t{}\n", report.summary.removed));
        push_term_refs(&mut output, &report.removed);

        output.push_str(&format!("\nTERMS MODIFIED\t{}\n", report.summary.modified));
        for (namespace, terms) in report.modified.iter() {
            for term in terms {
                output.push_str(&format!(
                    "{}\t{}\t{}",
                    namespace.unwrap_or(NOT_AVAILABLE),
                    term.id,
                    term.name.as_deref().unwrap_or(NOT_AVAILABLE)
                ));
                for (field, change) in &term.changes {
                    output.push_str(&format!(
                        "\t{} (current: {} previous: {})",
                        field, change.current, change.previous
                    ));
                }
                output.push('\n');
            }
        }

        output
    }

    pub fn export(&self, report: &ChangeReport) -> Result<ExportResult, ExportError> {
        Ok(ExportResult {
            content: self.to_tabular(report),
            format: FORMAT.to_string(),
        })
    }
}

fn push_term_refs(output: &mut String, groups: &NamespaceGroups<TermRef>) {
    for (namespace, terms) in groups.iter() {
        for term in terms {
            output.push_str(&format!(
                "{}\t{}\t{}\n",
                namespace.unwrap_or(NOT_AVAILABLE),
                term.id,
                term.name.as_deref().unwrap_or(NOT_AVAILABLE)
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff_snapshots;
    use crate::import::parse_document;

    #[test]
    fn test_unchanged_report_has_only_headings() {
        let snapshot = parse_document("data-version: releases/2024-01-01\n[Term]\nid: GO:1\n").unwrap();
        let report = diff_snapshots(&snapshot, &snapshot);
        let text = TsvReportExporter::default().to_tabular(&report);
        assert_eq!(
            text,
            "CHANGES IN GO BETWEEN releases/2024-01-01 (N/A) and releases/2024-01-01 (N/A)\n\
             \nTERMS ADDED\t0\n\
             \nTERMS REMOVED\t0\n\
             \nTERMS MODIFIED\t0\n"
        );
    }

    #[test]
    fn test_custom_label() {
        let snapshot = parse_document("[Term]\nid: X:1\n").unwrap();
        let report = diff_snapshots(&snapshot, &snapshot);
        let text = TsvReportExporter::new("PO").to_tabular(&report);
        assert!(text.starts_with("CHANGES IN PO BETWEEN N/A (N/A) and N/A (N/A)\n"));
    }
}
