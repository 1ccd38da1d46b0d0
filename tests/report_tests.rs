//! Report output tests: JSON shape, markdown, structure guide

use convcheck::report::{full_guide, generate_report, structure_guide};
use convcheck::schema::SectionKind;
use convcheck::validator::validate_converters;
use serde_json::json;
use std::collections::BTreeSet;

#[test]
fn test_json_report_shape() {
    let records = vec![json!({ "id": "broken", "keywords": "not-an-array" })];
    let report = validate_converters(&records);
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["isValid"], false);
    assert_eq!(value["total"], 1);
    assert_eq!(value["valid"], 0);
    assert_eq!(value["failed"], 1);
    assert_eq!(value["failedIds"], json!(["broken"]));
    assert_eq!(value["wordCounts"][0]["id"], "broken");
    assert_eq!(value["wordCounts"][0]["words"], 0);

    // Errors serialize as their display strings.
    let errors = value["records"][0]["errors"].as_array().unwrap();
    assert!(errors.contains(&json!("keywords must be an array")));
}

#[test]
fn test_markdown_report_sections() {
    let records = vec![
        json!({ "id": "broken" }),
        json!({ "id": "other", "extraField": 1 }),
    ];
    let report = validate_converters(&records);
    let markdown = generate_report(&report).unwrap();

    assert!(markdown.starts_with("# Content Validation Report"));
    assert!(markdown.contains("## ❌ Failing Converters"));
    assert!(markdown.contains("### broken"));
    assert!(markdown.contains("| broken | 0 |"));
    assert!(markdown.contains("## ⚠️ Warnings"));
    assert!(markdown.contains("unknown field \"extraField\""));
}

#[test]
fn test_guide_sections_collected_from_failing_records() {
    let records = vec![json!({
        "id": "x",
        "contentSections": {
            "hero": {},
            "tips": { "title": "T" }
        }
    })];
    let report = validate_converters(&records);

    let kinds = report.guide_sections();
    assert!(kinds.contains(&SectionKind::Hero));
    assert!(kinds.contains(&SectionKind::Tips));

    let guide = structure_guide(&kinds);
    assert!(guide.contains("\"hero\":"));
    assert!(guide.contains("\"tips\":"));
    assert!(guide.contains("Required top-level fields:"));
}

#[test]
fn test_guide_not_triggered_by_healthy_sections() {
    let records = vec![json!({
        "id": "x",
        "contentSections": { "hero": { "title": "T" } }
    })];
    let report = validate_converters(&records);
    // The record fails other checks, but the hero section itself is
    // fine, so it contributes nothing to the guide.
    assert!(!report.summary.is_valid);
    assert!(report.guide_sections().is_empty());
}

#[test]
fn test_full_guide_mentions_every_section_type() {
    let guide = full_guide();
    for kind in SectionKind::ALL {
        assert!(guide.contains(kind.name()), "guide is missing {kind}");
    }
}

#[test]
fn test_structure_guide_with_no_sections_still_lists_keys() {
    let guide = structure_guide(&BTreeSet::new());
    assert!(guide.contains("Required top-level fields: id, slug, title"));
}
