//! Conversion matrix completeness checks
//!
//! The matrix must be fully authored: every ordered (from, to) pair
//! drawn from `supportedUnits`, self-pairs included, needs an explicit
//! numeric factor. No reciprocal or chained inference happens here even
//! though the rendering layer applies such fallbacks at runtime —
//! validation forces explicit data.

use crate::models::{IssueCategory, ValidationIssue};
use serde_json::{Map, Value};

pub fn validate_matrix(
    units: &[&str],
    conversions: &Map<String, Value>,
    errors: &mut Vec<ValidationIssue>,
) {
    for from in units {
        // A missing or non-object row surfaces as one missing-factor
        // error per expected column.
        let row = conversions.get(*from).and_then(Value::as_object);
        for to in units {
            let path = format!("conversions.{from}");
            match row.and_then(|r| r.get(*to)) {
                None => errors.push(ValidationIssue::field(
                    IssueCategory::ConversionData,
                    path,
                    format!("missing factor for \"{to}\""),
                )),
                Some(factor) => match factor.as_f64() {
                    None => errors.push(ValidationIssue::field(
                        IssueCategory::ConversionData,
                        path,
                        format!("factor for \"{to}\" must be a number"),
                    )),
                    // Exact equality: the self factor must be the literal 1.
                    Some(f) if from == to && f != 1.0 => errors.push(ValidationIssue::field(
                        IssueCategory::ConversionData,
                        path,
                        format!("self-conversion factor must be exactly 1, found {factor}"),
                    )),
                    Some(_) => {}
                },
            }
        }
    }
}
