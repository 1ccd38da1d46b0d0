//! Validation issue tracking and reporting

use serde::{Serialize, Serializer};

/// One accumulated validation error for a single converter record.
///
/// The `Display` form is the public error-string contract: every issue
/// renders as `<path> <problem>` so the offending location can be found
/// without re-reading the document.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub category: IssueCategory,
    pub location: Location,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCategory {
    MissingField,
    WrongType,
    ConversionData,
    ContentSequence,
    UnknownSection,
    SectionStructure,
    SectionRule,
    Faq,
    WordCount,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// The record as a whole; the message stands alone.
    Record,
    /// A dotted field path, e.g. `contentSections.hero`.
    Field(String),
    /// An element of an array field, e.g. `faqs[2]`.
    Item(String, usize),
}

impl ValidationIssue {
    pub fn new(
        category: IssueCategory,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            location,
            message: message.into(),
        }
    }

    /// Issue at a dotted field path.
    pub fn field(
        category: IssueCategory,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(category, Location::Field(path.into()), message)
    }

    /// Issue at one element of an array field.
    pub fn item(
        category: IssueCategory,
        path: impl Into<String>,
        index: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::new(category, Location::Item(path.into(), index), message)
    }

    /// Record-level issue with no field path.
    pub fn record(category: IssueCategory, message: impl Into<String>) -> Self {
        Self::new(category, Location::Record, message)
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Location::Record => write!(f, "{}", self.message),
            Location::Field(path) => write!(f, "{} {}", path, self.message),
            Location::Item(path, index) => write!(f, "{}[{}] {}", path, index, self.message),
        }
    }
}

impl Serialize for ValidationIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Non-fatal observation collected across the whole run. Warnings never
/// affect pass/fail classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warning {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Warning {
    pub fn new(message: impl Into<String>, location: Option<String>) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_field_path() {
        let issue = ValidationIssue::field(
            IssueCategory::SectionStructure,
            "contentSections.hero",
            "missing required key \"title\"",
        );
        assert_eq!(
            issue.to_string(),
            "contentSections.hero missing required key \"title\""
        );
    }

    #[test]
    fn test_display_item_path() {
        let issue = ValidationIssue::item(
            IssueCategory::Faq,
            "faqs",
            2,
            "question must be a non-empty string",
        );
        assert_eq!(issue.to_string(), "faqs[2] question must be a non-empty string");
    }

    #[test]
    fn test_display_record_level() {
        let issue = ValidationIssue::record(
            IssueCategory::UnknownSection,
            "Unknown section: \"madeUpSection\"",
        );
        assert_eq!(issue.to_string(), "Unknown section: \"madeUpSection\"");
    }

    #[test]
    fn test_issue_serializes_as_display_string() {
        let issue = ValidationIssue::field(IssueCategory::WrongType, "keywords", "must be an array");
        let json = serde_json::to_string(&issue).unwrap();
        assert_eq!(json, "\"keywords must be an array\"");
    }
}
