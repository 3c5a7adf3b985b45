//! Output formatters for check results.

use crate::checker::CheckSummary;
use crate::error::{CheckResult, TokenCheckError};
use serde::Serialize;

/// Output format for check results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

impl OutputFormat {
    /// Parse a format name. Unknown names fall back to text.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// JSON structure for a failed check
#[derive(Debug, Clone, Serialize)]
pub struct JsonError {
    #[serde(rename = "ruleId")]
    pub rule_id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub message: String,
}

/// Outcome of a single check, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Check name (e.g. "usage", "root")
    pub check: &'static str,
    pub ok: bool,
    pub files: Vec<String>,
    pub variables: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

impl CheckReport {
    pub fn passed(check: &'static str, summary: &CheckSummary) -> Self {
        Self {
            check,
            ok: true,
            files: summary
                .files
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            variables: summary.variables,
            error: None,
        }
    }

    pub fn failed(check: &'static str, error: &TokenCheckError) -> Self {
        Self {
            check,
            ok: false,
            files: error
                .file()
                .map(|p| vec![p.display().to_string()])
                .unwrap_or_default(),
            variables: 0,
            error: Some(JsonError {
                rule_id: error.kind(),
                file: error.file().map(|p| p.display().to_string()),
                message: error.to_string(),
            }),
        }
    }

    pub fn from_result(check: &'static str, result: &CheckResult<CheckSummary>) -> Self {
        match result {
            Ok(summary) => Self::passed(check, summary),
            Err(error) => Self::failed(check, error),
        }
    }
}

/// Format a report according to the specified format
pub fn format_report(report: &CheckReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_text(report),
        OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_default(),
    }
}

fn format_text(report: &CheckReport) -> String {
    match &report.error {
        None => format!(
            "\u{2713} {}: {} file{} consistent with {} design token{}",
            report.check,
            report.files.len(),
            if report.files.len() == 1 { "" } else { "s" },
            report.variables,
            if report.variables == 1 { "" } else { "s" }
        ),
        Some(error) => format!(
            "\u{2716} {} [{}]: {}",
            report.check, error.rule_id, error.message
        ),
    }
}

/// Format a summary line
pub fn format_summary(passed: usize, failed: usize) -> String {
    if failed == 0 {
        format!(
            "All {} check{} passed",
            passed,
            if passed == 1 { "" } else { "s" }
        )
    } else {
        format!(
            "{} check{} failed, {} passed",
            failed,
            if failed == 1 { "" } else { "s" },
            passed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_passed_text() {
        let summary = CheckSummary {
            files: vec![PathBuf::from("src/styles.scss")],
            variables: 6,
        };
        let report = CheckReport::passed("root", &summary);
        assert_eq!(
            format_report(&report, OutputFormat::Text),
            "\u{2713} root: 1 file consistent with 6 design tokens"
        );
    }

    #[test]
    fn test_format_failed_json() {
        let error = TokenCheckError::UnknownVariable {
            file: PathBuf::from("a.scss"),
            name: "nope".into(),
        };
        let report = CheckReport::failed("usage", &error);
        let json: serde_json::Value =
            serde_json::from_str(&format_report(&report, OutputFormat::Json)).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["ruleId"], "unknown-variable");
        assert_eq!(json["error"]["file"], "a.scss");
    }

    #[test]
    fn test_format_failed_text() {
        let error = TokenCheckError::NoStylesheetFound {
            searched: "src/styles.scss".into(),
        };
        let report = CheckReport::failed("root", &error);
        insta::assert_snapshot!(
            format_report(&report, OutputFormat::Text),
            @"✖ root [no-stylesheet-found]: No stylesheet found (looked for: src/styles.scss)"
        );
    }

    #[test]
    fn test_format_summary() {
        assert_eq!(format_summary(2, 0), "All 2 checks passed");
        assert_eq!(format_summary(1, 1), "1 check failed, 1 passed");
    }

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_name("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_name("yaml"), OutputFormat::Text);
    }
}
