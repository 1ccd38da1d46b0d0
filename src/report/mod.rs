//! Report and guide generation

pub mod generator;
pub mod guide;

use crate::models::ValidationReport;
use anyhow::Result;

pub use guide::{full_guide, section_example, structure_guide};

pub fn generate_report(report: &ValidationReport) -> Result<String> {
    generator::generate_markdown_report(report)
}
