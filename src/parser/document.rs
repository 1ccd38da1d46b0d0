//! Content document loading
//!
//! Documents are parsed with json5 so hand-authored files may carry
//! comments and trailing commas. The three fatal conditions (unreadable
//! file, invalid JSON, no records array) surface here as typed errors;
//! everything downstream is accumulated diagnostics.

use serde_json::Value;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Parse(#[from] json5::Error),

    #[error("document has no \"converters\" array")]
    MissingConverters,

    #[error("\"converters\" must be an array")]
    NotAnArray,
}

/// A parsed content document: the raw converter records, in file order.
#[derive(Debug, Clone)]
pub struct ContentDocument {
    pub converters: Vec<Value>,
}

/// Parse a document from its text content.
pub fn parse_document(content: &str) -> Result<ContentDocument, DocumentError> {
    let value: Value = json5::from_str(content)?;
    let Some(root) = value.as_object() else {
        return Err(DocumentError::MissingConverters);
    };
    match root.get("converters") {
        None => Err(DocumentError::MissingConverters),
        Some(Value::Array(records)) => Ok(ContentDocument {
            converters: records.clone(),
        }),
        Some(_) => Err(DocumentError::NotAnArray),
    }
}

/// Read and parse a document from disk.
pub fn load_document(path: impl AsRef<Path>) -> Result<ContentDocument, DocumentError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_document(&content)
}
