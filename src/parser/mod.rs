//! Input parsing for content documents

pub mod document;

pub use document::{load_document, parse_document, ContentDocument, DocumentError};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect every `*.json` document beneath a directory, sorted so runs
/// are reproducible.
pub fn collect_documents(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_documents_finds_nested_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("cooking")).unwrap();
        fs::write(dir.path().join("cooking/volume.json"), "{}").unwrap();
        fs::write(dir.path().join("weight.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "skip me").unwrap();

        let paths = collect_documents(dir.path());
        let names: Vec<_> = paths
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["volume.json", "weight.json"]);
    }
}
