//! Converter record data structures
//!
//! The typed view of a converter record. Validation runs over raw
//! `serde_json::Value` so that shape problems accumulate as diagnostics
//! instead of aborting the decode; this model is the post-validation
//! shape handed to consumers (the rendering layer, the CLI display).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverterRecord {
    pub id: String,
    pub slug: String,
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub categories: Vec<String>,

    /// Unit-to-unit factor matrix. Takes precedence over
    /// `conversion_formulas` when both are present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversions: Option<HashMap<String, HashMap<String, f64>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_formulas: Option<Vec<ConversionFormula>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_formulas: Option<Vec<ConversionFormula>>,

    #[serde(default)]
    pub supported_units: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<Defaults>,

    #[serde(default)]
    pub content_sequence: Vec<String>,

    #[serde(default)]
    pub content_sections: serde_json::Map<String, Value>,

    #[serde(default)]
    pub faqs: Vec<Faq>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_related_links: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl ConverterRecord {
    /// Decode a raw record. Intended for records that already passed
    /// validation; decoding an unvalidated record may fail on shape
    /// mismatches.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }
}

/// Initial UI state for the converter widget. Informational for the
/// validator; only key presence is checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    pub value: Value,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionFormula {
    pub from: String,
    pub to: String,
    pub formula: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}
