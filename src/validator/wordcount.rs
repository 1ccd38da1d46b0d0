//! Word-count content gate
//!
//! Counts whitespace-separated tokens across a record's prose surfaces:
//! `title`, `description`, every string leaf under `contentSections`,
//! and every top-level FAQ question/answer. Pure token count — no
//! stemming, no locale rules, no de-duplication — so the result cannot
//! depend on object key order.

use serde_json::Value;

/// Minimum token count a record must reach to pass validation.
pub const MIN_WORD_COUNT: usize = 1000;

pub fn count_words(record: &Value) -> usize {
    let Some(obj) = record.as_object() else {
        return 0;
    };

    let mut words = 0;
    words += obj.get("title").and_then(Value::as_str).map_or(0, count_tokens);
    words += obj
        .get("description")
        .and_then(Value::as_str)
        .map_or(0, count_tokens);
    words += obj.get("contentSections").map_or(0, count_string_leaves);

    if let Some(faqs) = obj.get("faqs").and_then(Value::as_array) {
        for faq in faqs {
            words += faq
                .pointer("/question")
                .and_then(Value::as_str)
                .map_or(0, count_tokens);
            words += faq
                .pointer("/answer")
                .and_then(Value::as_str)
                .map_or(0, count_tokens);
        }
    }

    words
}

/// Tokens in every string leaf of a value tree. Arrays recurse
/// element-wise, objects value-wise; non-string scalars contribute
/// nothing.
fn count_string_leaves(value: &Value) -> usize {
    match value {
        Value::String(s) => count_tokens(s),
        Value::Array(items) => items.iter().map(count_string_leaves).sum(),
        Value::Object(map) => map.values().map(count_string_leaves).sum(),
        _ => 0,
    }
}

fn count_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}
