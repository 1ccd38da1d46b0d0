//! Structure guide generation
//!
//! Reconstructs an example JSON body for each section type from the
//! same schema descriptors the validator enforces, so the guide cannot
//! drift from the checks. Printed for any section type that erred, and
//! in full via `--guide`.

use crate::schema::{ItemShape, SectionKind};
use crate::validator::{OPTIONAL_TOP_LEVEL_KEYS, REQUIRED_TOP_LEVEL_KEYS};
use serde_json::{json, Map, Value};
use std::collections::BTreeSet;

/// Example body for one section type, reconstructed from its schema.
pub fn section_example(kind: SectionKind) -> Value {
    let schema = kind.schema();
    let mut example = Map::new();

    for key in schema.required_keys {
        example.insert((*key).to_string(), json!("..."));
    }

    for rule in schema.array_fields {
        example.insert(
            (*rule.field).to_string(),
            Value::Array(vec![item_example(kind, &rule.items)]),
        );
    }

    Value::Object(example)
}

fn item_example(kind: SectionKind, shape: &ItemShape) -> Value {
    match shape {
        ItemShape::Text => json!("..."),
        ItemShape::Row => json!(["...", "..."]),
        ItemShape::Object { required_keys } => {
            let mut item = Map::new();
            for key in *required_keys {
                item.insert((*key).to_string(), json!("..."));
            }
            Value::Object(item)
        }
        ItemShape::Custom(_) => match kind {
            SectionKind::QuickReference => json!({ "ingredient": "...", "cup": 1 }),
            _ => json!({}),
        },
    }
}

/// Guide text for the given section types plus the top-level key lists.
pub fn structure_guide(kinds: &BTreeSet<SectionKind>) -> String {
    let mut guide = String::new();
    guide.push_str("Expected structure\n");
    guide.push_str("------------------\n\n");

    for kind in kinds {
        guide.push_str(&format!("\"{kind}\":\n"));
        if let Ok(pretty) = serde_json::to_string_pretty(&section_example(*kind)) {
            guide.push_str(&pretty);
            guide.push('\n');
        }
        let optional = kind.schema().optional_keys;
        if !optional.is_empty() {
            guide.push_str(&format!("optional keys: {}\n", optional.join(", ")));
        }
        guide.push('\n');
    }

    guide.push_str(&format!(
        "Required top-level fields: {}\n",
        REQUIRED_TOP_LEVEL_KEYS.join(", ")
    ));
    guide.push_str(&format!(
        "Optional top-level fields: {}\n",
        OPTIONAL_TOP_LEVEL_KEYS.join(", ")
    ));
    guide
}

/// The full guide, covering every known section type.
pub fn full_guide() -> String {
    structure_guide(&SectionKind::ALL.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_example_carries_required_keys() {
        let example = section_example(SectionKind::StepByStep);
        assert_eq!(example["title"], "...");
        assert_eq!(example["steps"][0]["description"], "...");
    }

    #[test]
    fn test_quick_reference_example_shows_a_conversion_value() {
        let example = section_example(SectionKind::QuickReference);
        assert_eq!(example["items"][0]["ingredient"], "...");
        assert_eq!(example["items"][0]["cup"], 1);
    }

    #[test]
    fn test_guide_lists_top_level_keys() {
        let guide = structure_guide(&BTreeSet::new());
        assert!(guide.contains("Required top-level fields: id, slug, title"));
        assert!(guide.contains("conversionFormulas"));
    }

    #[test]
    fn test_full_guide_covers_every_kind() {
        let guide = full_guide();
        for kind in SectionKind::ALL {
            assert!(
                guide.contains(&format!("\"{kind}\":")),
                "guide is missing {kind}"
            );
        }
    }
}
