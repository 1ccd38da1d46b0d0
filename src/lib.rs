//! Converter content validation
//!
//! A library for validating the JSON content documents behind a
//! conversion-calculator site before they are published. Each converter
//! record is checked against a static per-section schema table; every
//! violation is accumulated as a path-addressed error string, and a
//! word-count gate keeps thin pages out of the build. A record that
//! passes is assumed safe for the (separate) rendering layer to
//! consume without further defensive checks.

pub mod models;
pub mod parser;
pub mod report;
pub mod schema;
pub mod validator;

pub use models::{ConverterRecord, ValidationIssue, ValidationReport, Warning};
pub use parser::{load_document, parse_document, ContentDocument, DocumentError};
pub use validator::validate_converters;

use anyhow::{Context, Result};
use std::path::Path;

/// Load a content document and validate every converter record in it.
///
/// The fatal document-level conditions (unreadable file, invalid JSON,
/// missing `converters` array) surface as errors here; per-record
/// problems land in the returned report.
pub fn validate_file(path: &Path) -> Result<ValidationReport> {
    let document = parser::load_document(path)
        .with_context(|| format!("cannot validate {}", path.display()))?;
    Ok(validator::validate_converters(&document.converters))
}
