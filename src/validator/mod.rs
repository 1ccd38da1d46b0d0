//! Validation pipeline
//!
//! Per-record checks aggregated into a run-level report. Records are
//! processed in input order and classified independently; one record's
//! failure never stops the sweep, and output ordering stays
//! input-order-stable so reports are reproducible.

pub mod matrix;
pub mod record;
pub mod section;
pub mod wordcount;

use crate::models::{RecordOutcome, ReportSummary, ValidationReport, Warning, WordCountEntry};
use serde_json::Value;

pub use record::{validate_record, OPTIONAL_TOP_LEVEL_KEYS, REQUIRED_TOP_LEVEL_KEYS};
pub use wordcount::MIN_WORD_COUNT;

/// Validate a collection of converter records and assemble the report.
///
/// This is the headless entry point: no I/O, no process-exit side
/// effects. Zero records is trivially valid.
pub fn validate_converters(records: &[Value]) -> ValidationReport {
    let mut outcomes: Vec<RecordOutcome> = Vec::with_capacity(records.len());
    let mut warnings: Vec<Warning> = Vec::new();
    let mut failed_ids: Vec<String> = Vec::new();
    let mut word_counts: Vec<WordCountEntry> = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let (outcome, mut record_warnings) = validate_record(record, index);
        warnings.append(&mut record_warnings);
        word_counts.push(WordCountEntry {
            id: outcome.display_id.clone(),
            words: outcome.word_count,
        });
        if !outcome.is_valid() {
            failed_ids.push(outcome.display_id.clone());
        }
        outcomes.push(outcome);
    }

    let total = records.len();
    let failed = failed_ids.len();
    ValidationReport {
        summary: ReportSummary {
            is_valid: failed == 0,
            total,
            valid: total - failed,
            failed,
        },
        failed_ids,
        word_counts,
        warnings,
        records: outcomes,
    }
}
