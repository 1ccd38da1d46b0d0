//! Validation run report and per-record outcomes

use super::issue::{ValidationIssue, Warning};
use crate::schema::SectionKind;
use serde::Serialize;
use std::collections::BTreeSet;

/// Result of validating one content document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    #[serde(flatten)]
    pub summary: ReportSummary,

    /// Display ids of failing records, in input order.
    pub failed_ids: Vec<String>,

    /// Word count per record, in input order. An ordered list rather
    /// than a map so serialization preserves input order.
    pub word_counts: Vec<WordCountEntry>,

    /// Run-wide warnings. Never affect pass/fail.
    pub warnings: Vec<Warning>,

    /// Per-record outcomes, in input order.
    pub records: Vec<RecordOutcome>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub is_valid: bool,
    pub total: usize,
    pub valid: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordCountEntry {
    pub id: String,
    pub words: usize,
}

/// Everything the validator learned about one record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordOutcome {
    /// The record's `id`, or `converter-<index>` when absent.
    pub display_id: String,

    /// Errors serialize as their `<path> <problem>` display strings.
    pub errors: Vec<ValidationIssue>,

    pub word_count: usize,

    /// Section types that produced errors; drives the structure guide.
    #[serde(skip)]
    pub guide_sections: BTreeSet<SectionKind>,
}

impl RecordOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in display-string form.
    pub fn error_strings(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

impl ValidationReport {
    /// Union of guide-worthy section types across failing records.
    pub fn guide_sections(&self) -> BTreeSet<SectionKind> {
        self.records
            .iter()
            .flat_map(|r| r.guide_sections.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::issue::IssueCategory;
    use pretty_assertions::assert_eq;

    fn outcome(id: &str, errors: Vec<ValidationIssue>) -> RecordOutcome {
        RecordOutcome {
            display_id: id.to_string(),
            errors,
            word_count: 0,
            guide_sections: BTreeSet::new(),
        }
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = ValidationReport {
            summary: ReportSummary {
                is_valid: false,
                total: 2,
                valid: 1,
                failed: 1,
            },
            failed_ids: vec!["b".to_string()],
            word_counts: vec![
                WordCountEntry { id: "a".to_string(), words: 1200 },
                WordCountEntry { id: "b".to_string(), words: 40 },
            ],
            warnings: vec![],
            records: vec![
                outcome("a", vec![]),
                outcome(
                    "b",
                    vec![ValidationIssue::field(
                        IssueCategory::WrongType,
                        "keywords",
                        "must be an array",
                    )],
                ),
            ],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["failedIds"][0], "b");
        assert_eq!(json["wordCounts"][1]["words"], 40);
        assert_eq!(json["records"][1]["errors"][0], "keywords must be an array");
    }

    #[test]
    fn test_error_strings() {
        let out = outcome(
            "a",
            vec![ValidationIssue::record(
                IssueCategory::MissingField,
                "missing required field \"id\"",
            )],
        );
        assert_eq!(out.error_strings(), vec!["missing required field \"id\""]);
        assert!(!out.is_valid());
    }
}
