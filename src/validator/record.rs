//! Record-level validation
//!
//! Runs every check unconditionally and accumulates all findings in one
//! pass — a missing `contentSections` does not suppress the word-count
//! gate, and vice versa. Exhaustive diagnostics per run are the point;
//! nothing here short-circuits or throws past the record boundary.

use super::matrix::validate_matrix;
use super::section::validate_section;
use super::wordcount::{count_words, MIN_WORD_COUNT};
use crate::models::{IssueCategory, RecordOutcome, ValidationIssue, Warning};
use crate::schema::SectionKind;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Top-level keys every record must carry. Absence is an error, not a
/// default-filled gap.
pub const REQUIRED_TOP_LEVEL_KEYS: [&str; 13] = [
    "id",
    "slug",
    "title",
    "description",
    "keywords",
    "categories",
    "manualRelatedLinks",
    "featured",
    "contentSequence",
    "defaults",
    "supportedUnits",
    "faqs",
    "contentSections",
];

/// Known-but-optional top-level keys. Anything outside the
/// required+optional allow-list is tolerated with a warning.
pub const OPTIONAL_TOP_LEVEL_KEYS: [&str; 3] =
    ["conversions", "conversionFormulas", "ingredientFormulas"];

/// Top-level keys that must be arrays when present.
const ARRAY_TYPED_KEYS: [&str; 7] = [
    "keywords",
    "categories",
    "manualRelatedLinks",
    "supportedUnits",
    "conversionFormulas",
    "ingredientFormulas",
    "faqs",
];

const DEFAULTS_KEYS: [&str; 3] = ["value", "from", "to"];

/// Validate one converter record. Pure function of the record: returns
/// the outcome plus any run-level warnings it raised.
pub fn validate_record(record: &Value, index: usize) -> (RecordOutcome, Vec<Warning>) {
    let display_id = display_id(record, index);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut guide_sections = BTreeSet::new();

    let Some(obj) = record.as_object() else {
        errors.push(ValidationIssue::record(
            IssueCategory::WrongType,
            "record must be a JSON object",
        ));
        let outcome = RecordOutcome {
            display_id,
            errors,
            word_count: 0,
            guide_sections,
        };
        return (outcome, warnings);
    };

    check_required_keys(obj, &display_id, &mut errors, &mut warnings);
    check_conversion_representation(obj, &display_id, &mut errors, &mut warnings);
    check_array_typed_keys(obj, &mut errors);
    check_featured(obj, &mut errors);
    check_content_sequence(obj, &mut errors);
    check_content_sections(obj, &mut errors, &mut guide_sections);
    check_defaults(obj, &mut errors);
    check_supported_units(obj, &mut errors);
    check_faqs(obj, &mut errors);

    let word_count = count_words(record);
    if word_count < MIN_WORD_COUNT {
        errors.push(ValidationIssue::record(
            IssueCategory::WordCount,
            format!(
                "content has {word_count} words; {} more needed to reach the {MIN_WORD_COUNT}-word minimum",
                MIN_WORD_COUNT - word_count
            ),
        ));
    }

    let outcome = RecordOutcome {
        display_id,
        errors,
        word_count,
        guide_sections,
    };
    (outcome, warnings)
}

/// The record's `id`, or a positional placeholder when absent.
pub fn display_id(record: &Value, index: usize) -> String {
    record
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("converter-{index}"))
}

fn check_required_keys(
    obj: &Map<String, Value>,
    display_id: &str,
    errors: &mut Vec<ValidationIssue>,
    warnings: &mut Vec<Warning>,
) {
    for key in REQUIRED_TOP_LEVEL_KEYS {
        if !obj.contains_key(key) {
            errors.push(ValidationIssue::record(
                IssueCategory::MissingField,
                format!("missing required field \"{key}\""),
            ));
        }
    }

    for key in obj.keys() {
        let known = REQUIRED_TOP_LEVEL_KEYS.contains(&key.as_str())
            || OPTIONAL_TOP_LEVEL_KEYS.contains(&key.as_str());
        if !known {
            warnings.push(Warning::new(
                format!("unknown field \"{key}\""),
                Some(display_id.to_string()),
            ));
        }
    }
}

fn check_conversion_representation(
    obj: &Map<String, Value>,
    display_id: &str,
    errors: &mut Vec<ValidationIssue>,
    warnings: &mut Vec<Warning>,
) {
    let has_matrix = obj.contains_key("conversions");
    let has_formulas = obj.contains_key("conversionFormulas");
    match (has_matrix, has_formulas) {
        (false, false) => errors.push(ValidationIssue::record(
            IssueCategory::ConversionData,
            "must define \"conversions\" or \"conversionFormulas\"",
        )),
        (true, true) => warnings.push(Warning::new(
            "defines both \"conversions\" and \"conversionFormulas\"; using \"conversions\"",
            Some(display_id.to_string()),
        )),
        _ => {}
    }

    if let Some(conversions) = obj.get("conversions") {
        if !conversions.is_object() {
            errors.push(ValidationIssue::field(
                IssueCategory::WrongType,
                "conversions",
                "must be an object mapping unit to unit factors",
            ));
        }
    }
}

fn check_array_typed_keys(obj: &Map<String, Value>, errors: &mut Vec<ValidationIssue>) {
    for key in ARRAY_TYPED_KEYS {
        if let Some(value) = obj.get(key) {
            if !value.is_array() {
                errors.push(ValidationIssue::field(
                    IssueCategory::WrongType,
                    key,
                    "must be an array",
                ));
            }
        }
    }
}

fn check_featured(obj: &Map<String, Value>, errors: &mut Vec<ValidationIssue>) {
    if let Some(featured) = obj.get("featured") {
        if !featured.is_boolean() {
            errors.push(ValidationIssue::field(
                IssueCategory::WrongType,
                "featured",
                "must be a boolean",
            ));
        }
    }
}

fn check_content_sequence(obj: &Map<String, Value>, errors: &mut Vec<ValidationIssue>) {
    let Some(value) = obj.get("contentSequence") else {
        return;
    };
    let Some(sequence) = value.as_array() else {
        errors.push(ValidationIssue::field(
            IssueCategory::WrongType,
            "contentSequence",
            "must be an array",
        ));
        return;
    };
    if sequence.is_empty() {
        errors.push(ValidationIssue::field(
            IssueCategory::ContentSequence,
            "contentSequence",
            "must not be empty",
        ));
    }
    if !sequence.iter().any(|v| v.as_str() == Some("hero")) {
        errors.push(ValidationIssue::field(
            IssueCategory::ContentSequence,
            "contentSequence",
            "must include \"hero\"",
        ));
    }
}

fn check_content_sections(
    obj: &Map<String, Value>,
    errors: &mut Vec<ValidationIssue>,
    guide_sections: &mut BTreeSet<SectionKind>,
) {
    let Some(value) = obj.get("contentSections") else {
        return;
    };
    let Some(sections) = value.as_object() else {
        errors.push(ValidationIssue::field(
            IssueCategory::WrongType,
            "contentSections",
            "must be an object",
        ));
        return;
    };

    // Every non-special name in the sequence must have a section body.
    if let Some(sequence) = obj.get("contentSequence").and_then(Value::as_array) {
        for name in sequence.iter().filter_map(Value::as_str) {
            if SectionKind::is_special_sequence_name(name) {
                continue;
            }
            if !sections.contains_key(name) {
                errors.push(ValidationIssue::field(
                    IssueCategory::ContentSequence,
                    "contentSequence",
                    format!("references \"{name}\" but contentSections has no matching key"),
                ));
            }
        }
    }

    for (name, data) in sections {
        let before = errors.len();
        let kind = validate_section(name, data, errors);
        if errors.len() > before {
            if let Some(kind) = kind {
                guide_sections.insert(kind);
            }
        }
    }
}

fn check_defaults(obj: &Map<String, Value>, errors: &mut Vec<ValidationIssue>) {
    let Some(value) = obj.get("defaults") else {
        return;
    };
    let Some(defaults) = value.as_object() else {
        errors.push(ValidationIssue::field(
            IssueCategory::WrongType,
            "defaults",
            "must be an object",
        ));
        return;
    };
    for key in DEFAULTS_KEYS {
        if !defaults.contains_key(key) {
            errors.push(ValidationIssue::field(
                IssueCategory::MissingField,
                "defaults",
                format!("missing required key \"{key}\""),
            ));
        }
    }
}

fn check_supported_units(obj: &Map<String, Value>, errors: &mut Vec<ValidationIssue>) {
    let Some(units_value) = obj.get("supportedUnits") else {
        return;
    };
    let Some(units) = units_value.as_array() else {
        // Array-typedness already reported.
        return;
    };
    if units.is_empty() {
        errors.push(ValidationIssue::field(
            IssueCategory::ConversionData,
            "supportedUnits",
            "must not be empty",
        ));
    }
    for (index, unit) in units.iter().enumerate() {
        if !unit.is_string() {
            errors.push(ValidationIssue::item(
                IssueCategory::WrongType,
                "supportedUnits",
                index,
                "must be a string",
            ));
        }
    }

    // The matrix is only cross-checked when it is the active
    // representation and there are units to sweep.
    let unit_names: Vec<&str> = units.iter().filter_map(Value::as_str).collect();
    if unit_names.is_empty() {
        return;
    }
    if let Some(conversions) = obj.get("conversions").and_then(Value::as_object) {
        validate_matrix(&unit_names, conversions, errors);
    }
}

fn check_faqs(obj: &Map<String, Value>, errors: &mut Vec<ValidationIssue>) {
    let Some(faqs) = obj.get("faqs").and_then(Value::as_array) else {
        return;
    };
    for (index, faq) in faqs.iter().enumerate() {
        let Some(entry) = faq.as_object() else {
            errors.push(ValidationIssue::item(
                IssueCategory::Faq,
                "faqs",
                index,
                "must be an object",
            ));
            continue;
        };
        for key in ["question", "answer"] {
            let ok = entry
                .get(key)
                .and_then(Value::as_str)
                .is_some_and(|s| !s.trim().is_empty());
            if !ok {
                errors.push(ValidationIssue::item(
                    IssueCategory::Faq,
                    "faqs",
                    index,
                    format!("{key} must be a non-empty string"),
                ));
            }
        }
    }
}
