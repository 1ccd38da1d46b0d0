//! Report generation

use crate::models::ValidationReport;
use anyhow::Result;

pub fn generate_markdown_report(report: &ValidationReport) -> Result<String> {
    let mut out = String::new();

    out.push_str("# Content Validation Report\n\n");

    // Summary
    out.push_str("## Summary\n\n");
    out.push_str(&format!(
        "- **Status**: {}\n",
        if report.summary.is_valid { "✅ Valid" } else { "❌ Failed" }
    ));
    out.push_str(&format!("- **Converters**: {}\n", report.summary.total));
    out.push_str(&format!("- **Valid**: {}\n", report.summary.valid));
    out.push_str(&format!("- **Failed**: {}\n\n", report.summary.failed));

    // Failing records
    if !report.failed_ids.is_empty() {
        out.push_str("## ❌ Failing Converters\n\n");
        for outcome in report.records.iter().filter(|r| !r.is_valid()) {
            out.push_str(&format!("### {}\n\n", outcome.display_id));
            for error in &outcome.errors {
                out.push_str(&format!("- {}\n", error));
            }
            out.push('\n');
        }
    }

    // Word counts
    out.push_str("## Word Counts\n\n");
    out.push_str("| Converter | Words |\n");
    out.push_str("|-----------|-------|\n");
    for entry in &report.word_counts {
        out.push_str(&format!("| {} | {} |\n", entry.id, entry.words));
    }
    out.push('\n');

    // Warnings
    if !report.warnings.is_empty() {
        out.push_str("## ⚠️ Warnings\n\n");
        for warning in &report.warnings {
            match &warning.location {
                Some(location) => out.push_str(&format!("- {}: {}\n", location, warning.message)),
                None => out.push_str(&format!("- {}\n", warning.message)),
            }
        }
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validate_converters;
    use serde_json::json;

    #[test]
    fn test_report_lists_failing_records_and_word_counts() {
        let records = vec![json!({ "id": "broken" })];
        let report = validate_converters(&records);
        let markdown = generate_markdown_report(&report).unwrap();

        assert!(markdown.contains("### broken"));
        assert!(markdown.contains("- **Failed**: 1"));
        assert!(markdown.contains("| broken | 0 |"));
        assert!(markdown.contains("missing required field \"slug\""));
    }

    #[test]
    fn test_valid_report_has_no_failing_section() {
        let report = validate_converters(&[]);
        let markdown = generate_markdown_report(&report).unwrap();
        assert!(markdown.contains("✅ Valid"));
        assert!(!markdown.contains("Failing Converters"));
    }
}
