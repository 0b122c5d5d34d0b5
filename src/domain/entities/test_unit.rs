//! Test unit entity

use std::path::{Path, PathBuf};

/// Ordered group of resource files forming one logical test.
///
/// Order matters: for fix tests the first file is the expected one and the
/// last is the test input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestUnit {
    files: Vec<PathBuf>,
}

impl TestUnit {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    pub fn single(file: PathBuf) -> Self {
        Self { files: vec![file] }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn first(&self) -> Option<&Path> {
        self.files.first().map(PathBuf::as_path)
    }

    pub fn last(&self) -> Option<&Path> {
        self.files.last().map(PathBuf::as_path)
    }

    /// Whether any member path contains one of `fragments`
    pub fn matches_any(&self, fragments: &[String]) -> bool {
        self.files.iter().any(|path| {
            let path = path.to_string_lossy();
            fragments.iter().any(|fragment| path.contains(fragment.as_str()))
        })
    }

    pub fn into_files(self) -> Vec<PathBuf> {
        self.files
    }
}
