//! Per-section validation against the schema table
//!
//! Dispatches one `contentSections` entry to its schema descriptor:
//! unknown names are rejected, required keys checked, array-field rules
//! applied, and the section's cross-field hook run last. Rule hooks run
//! under `catch_unwind` — a misbehaving rule becomes one error for its
//! section instead of taking down the whole run.

use crate::models::{IssueCategory, ValidationIssue};
use crate::schema::{ItemRule, ItemShape, SectionKind, SectionRule};
use serde_json::{Map, Value};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Validate one named section body. Returns the kind when the name is
/// known, so the caller can track which section types erred.
pub fn validate_section(
    name: &str,
    data: &Value,
    errors: &mut Vec<ValidationIssue>,
) -> Option<SectionKind> {
    let Some(kind) = SectionKind::from_name(name) else {
        errors.push(ValidationIssue::record(
            IssueCategory::UnknownSection,
            format!("Unknown section: \"{name}\""),
        ));
        return None;
    };

    let path = format!("contentSections.{name}");
    let Some(section) = data.as_object() else {
        errors.push(ValidationIssue::field(
            IssueCategory::WrongType,
            path,
            "must be an object",
        ));
        return Some(kind);
    };

    let schema = kind.schema();

    for key in schema.required_keys {
        if !section.contains_key(*key) {
            errors.push(ValidationIssue::field(
                IssueCategory::SectionStructure,
                path.clone(),
                format!("missing required key \"{key}\""),
            ));
        }
    }

    for rule in schema.array_fields {
        let Some(value) = section.get(rule.field) else {
            // Absence is covered by required_keys when the field is
            // mandatory; optional array fields only constrain when
            // present.
            continue;
        };
        let field_path = format!("{path}.{}", rule.field);
        let Some(items) = value.as_array() else {
            errors.push(ValidationIssue::field(
                IssueCategory::WrongType,
                field_path,
                "must be an array",
            ));
            continue;
        };
        if items.len() < rule.min_items {
            errors.push(ValidationIssue::field(
                IssueCategory::SectionStructure,
                field_path.clone(),
                format!(
                    "must have at least {} item(s), found {}",
                    rule.min_items,
                    items.len()
                ),
            ));
        }
        for (index, item) in items.iter().enumerate() {
            check_item(&rule.items, item, &field_path, index, errors);
        }
    }

    if let Some(hook) = schema.rule {
        run_section_rule(hook, section, &path, errors);
    }

    Some(kind)
}

fn check_item(
    shape: &ItemShape,
    item: &Value,
    path: &str,
    index: usize,
    errors: &mut Vec<ValidationIssue>,
) {
    match shape {
        ItemShape::Text => {
            let ok = item.as_str().is_some_and(|s| !s.trim().is_empty());
            if !ok {
                errors.push(ValidationIssue::item(
                    IssueCategory::SectionStructure,
                    path,
                    index,
                    "must be a non-empty string",
                ));
            }
        }
        ItemShape::Object { required_keys } => {
            let Some(obj) = item.as_object() else {
                errors.push(ValidationIssue::item(
                    IssueCategory::SectionStructure,
                    path,
                    index,
                    "must be an object",
                ));
                return;
            };
            for key in *required_keys {
                if !obj.contains_key(*key) {
                    errors.push(ValidationIssue::item(
                        IssueCategory::SectionStructure,
                        path,
                        index,
                        format!("missing required key \"{key}\""),
                    ));
                }
            }
        }
        ItemShape::Row => {
            if !item.is_array() {
                errors.push(ValidationIssue::item(
                    IssueCategory::SectionStructure,
                    path,
                    index,
                    "must be an array of cell values",
                ));
            }
        }
        ItemShape::Custom(rule) => run_item_rule(*rule, item, path, index, errors),
    }
}

fn run_section_rule(
    hook: &'static dyn SectionRule,
    section: &Map<String, Value>,
    path: &str,
    errors: &mut Vec<ValidationIssue>,
) {
    let mut scratch = Vec::new();
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        hook.check(section, path, &mut scratch);
    }));
    match outcome {
        Ok(()) => errors.append(&mut scratch),
        Err(payload) => errors.push(ValidationIssue::field(
            IssueCategory::SectionRule,
            path,
            format!("section validator failed: {}", panic_message(payload.as_ref())),
        )),
    }
}

fn run_item_rule(
    hook: &'static dyn ItemRule,
    item: &Value,
    path: &str,
    index: usize,
    errors: &mut Vec<ValidationIssue>,
) {
    let mut scratch = Vec::new();
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        hook.check(item, path, index, &mut scratch);
    }));
    match outcome {
        Ok(()) => errors.append(&mut scratch),
        Err(payload) => errors.push(ValidationIssue::item(
            IssueCategory::SectionRule,
            path,
            index,
            format!("item validator failed: {}", panic_message(payload.as_ref())),
        )),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
