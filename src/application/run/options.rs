//! Run options

use std::path::PathBuf;

/// Options for a test run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Parent of the per-plugin scratch directories
    pub scratch_dir: PathBuf,
    /// Only run units whose file paths contain one of these fragments
    pub test_filters: Vec<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            scratch_dir: std::env::temp_dir().join("save"),
            test_filters: Vec::new(),
        }
    }
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    pub fn with_test_filters(mut self, filters: Vec<String>) -> Self {
        self.test_filters = filters;
        self
    }
}
