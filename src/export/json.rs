//! JSON report exporter

use super::{ExportError, ExportResult};
use crate::diff::ChangeReport;

/// Format identifier of JSON exports
pub const FORMAT: &str = "json";

/// Renders the structured form of a change report
#[derive(Debug, Clone, Default)]
pub struct JsonReportExporter {
    /// Indent the output instead of writing a single line
    pub pretty: bool,
}

impl JsonReportExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// The structured form is the report itself
    pub fn to_structured<'a>(&self, report: &'a ChangeReport) -> &'a ChangeReport {
        report
    }

    /// Convert the report into a JSON value tree
    pub fn to_value(&self, report: &ChangeReport) -> Result<serde_json::Value, ExportError> {
        Ok(serde_json::to_value(self.to_structured(report))?)
    }

    pub fn export(&self, report: &ChangeReport) -> Result<ExportResult, ExportError> {
        let structured = self.to_structured(report);
        let content = if self.pretty {
            serde_json::to_string_pretty(structured)?
        } else {
            serde_json::to_string(structured)?
        };
        Ok(ExportResult {
            content,
            format: FORMAT.to_string(),
        })
    }
}
