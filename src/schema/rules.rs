//! Cross-field rule hooks for section schemas
//!
//! Most section constraints are declarative (required keys, array
//! bounds, item shapes). The rules here cover what the static table
//! cannot express: either-of-two-fields requirements, both-or-neither
//! pairings, and the quickReference item shape whose only fixed key is
//! `ingredient`.

use crate::models::{IssueCategory, ValidationIssue};
use serde_json::{Map, Value};

/// Section-level hook, run after the declarative checks for a section.
pub trait SectionRule: Sync {
    fn check(&self, section: &Map<String, Value>, path: &str, errors: &mut Vec<ValidationIssue>);
}

/// Item-level hook for array fields too heterogeneous for a static
/// item shape.
pub trait ItemRule: Sync {
    fn check(&self, item: &Value, path: &str, index: usize, errors: &mut Vec<ValidationIssue>);
}

/// At least one of two alternative array fields must be present
/// (`tips`/`items`, `links`/`items`).
pub struct EitherField {
    pub first: &'static str,
    pub second: &'static str,
}

impl SectionRule for EitherField {
    fn check(&self, section: &Map<String, Value>, path: &str, errors: &mut Vec<ValidationIssue>) {
        if !section.contains_key(self.first) && !section.contains_key(self.second) {
            errors.push(ValidationIssue::field(
                IssueCategory::SectionRule,
                path,
                format!("must define \"{}\" or \"{}\"", self.first, self.second),
            ));
        }
    }
}

/// `comparisonTable` may omit its table entirely, but a lone `columns`
/// or lone `rows` cannot render.
pub struct ColumnsAndRowsTogether;

impl SectionRule for ColumnsAndRowsTogether {
    fn check(&self, section: &Map<String, Value>, path: &str, errors: &mut Vec<ValidationIssue>) {
        let has_columns = section.contains_key("columns");
        let has_rows = section.contains_key("rows");
        if has_columns != has_rows {
            let missing = if has_columns { "rows" } else { "columns" };
            errors.push(ValidationIssue::field(
                IssueCategory::SectionRule,
                path,
                format!("defines \"columns\" and \"rows\" together or not at all (missing \"{missing}\")"),
            ));
        }
    }
}

/// A quickReference item names an ingredient and carries at least one
/// conversion value under any other key. `icon` and `tip` are
/// decoration, not values.
pub struct QuickReferenceItem;

const NON_VALUE_KEYS: [&str; 3] = ["ingredient", "icon", "tip"];

impl ItemRule for QuickReferenceItem {
    fn check(&self, item: &Value, path: &str, index: usize, errors: &mut Vec<ValidationIssue>) {
        let Some(obj) = item.as_object() else {
            errors.push(ValidationIssue::item(
                IssueCategory::SectionStructure,
                path,
                index,
                "must be an object",
            ));
            return;
        };

        let has_ingredient = obj
            .get("ingredient")
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty());
        if !has_ingredient {
            errors.push(ValidationIssue::item(
                IssueCategory::SectionStructure,
                path,
                index,
                "missing required key \"ingredient\"",
            ));
        }

        let has_value = obj.keys().any(|k| !NON_VALUE_KEYS.contains(&k.as_str()));
        if !has_value {
            errors.push(ValidationIssue::item(
                IssueCategory::SectionRule,
                path,
                index,
                "must have at least one conversion value",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn section(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_quick_reference_item_needs_a_value() {
        let mut errors = Vec::new();
        QuickReferenceItem.check(
            &json!({ "ingredient": "Flour" }),
            "contentSections.quickReference.items",
            0,
            &mut errors,
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "contentSections.quickReference.items[0] must have at least one conversion value"
        );
    }

    #[test]
    fn test_quick_reference_item_with_value_passes() {
        let mut errors = Vec::new();
        QuickReferenceItem.check(
            &json!({ "ingredient": "Flour", "cup": 1 }),
            "contentSections.quickReference.items",
            0,
            &mut errors,
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_quick_reference_item_icon_and_tip_are_not_values() {
        let mut errors = Vec::new();
        QuickReferenceItem.check(
            &json!({ "ingredient": "Flour", "icon": "🌾", "tip": "sift first" }),
            "contentSections.quickReference.items",
            3,
            &mut errors,
        );
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("items[3]"));
    }

    #[test]
    fn test_quick_reference_item_missing_ingredient() {
        let mut errors = Vec::new();
        QuickReferenceItem.check(
            &json!({ "cup": 1 }),
            "contentSections.quickReference.items",
            1,
            &mut errors,
        );
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("ingredient"));
    }

    #[test]
    fn test_either_field_missing_both() {
        let mut errors = Vec::new();
        let rule = EitherField { first: "tips", second: "items" };
        rule.check(
            &section(json!({ "title": "Tips" })),
            "contentSections.tips",
            &mut errors,
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "contentSections.tips must define \"tips\" or \"items\""
        );
    }

    #[test]
    fn test_either_field_one_present() {
        let mut errors = Vec::new();
        let rule = EitherField { first: "tips", second: "items" };
        rule.check(
            &section(json!({ "title": "Tips", "items": ["keep it simple"] })),
            "contentSections.tips",
            &mut errors,
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_columns_without_rows() {
        let mut errors = Vec::new();
        ColumnsAndRowsTogether.check(
            &section(json!({ "title": "T", "columns": ["a", "b"] })),
            "contentSections.comparisonTable",
            &mut errors,
        );
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("missing \"rows\""));
    }

    #[test]
    fn test_columns_and_rows_both_absent_is_fine() {
        let mut errors = Vec::new();
        ColumnsAndRowsTogether.check(
            &section(json!({ "title": "T" })),
            "contentSections.comparisonTable",
            &mut errors,
        );
        assert!(errors.is_empty());
    }
}
