//! Temporary suite trees.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use save::application::{RunOptions, RunReport, RunUseCase};
use save::domain::ports::ProcessExecutor;
use save::{LocalFs, SaveResult};
use tempfile::TempDir;

/// A suite directory plus a separate scratch directory
pub struct Suite {
    pub root: TempDir,
    pub scratch: TempDir,
}

impl Suite {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
            scratch: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Write `content` to `relative`, creating directories
    pub fn file(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
        self
    }

    /// Write a `save.toml` assembled from `sections` into `dir`
    pub fn config(&self, dir: &str, sections: &[&str]) -> &Self {
        let relative = if dir.is_empty() {
            "save.toml".to_string()
        } else {
            format!("{dir}/save.toml")
        };
        self.file(&relative, &sections.concat())
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Run from `entry` (relative to the root) with `executor` standing in for the tool
    pub fn run(&self, entry: &str, executor: Arc<dyn ProcessExecutor>) -> SaveResult<RunReport> {
        self.run_filtered(entry, executor, &[])
    }

    pub fn run_filtered(
        &self,
        entry: &str,
        executor: Arc<dyn ProcessExecutor>,
        filters: &[&str],
    ) -> SaveResult<RunReport> {
        let options = RunOptions::new()
            .with_scratch_dir(self.scratch.path())
            .with_test_filters(filters.iter().map(|f| f.to_string()).collect());
        let entry = if entry.is_empty() {
            self.root().to_path_buf()
        } else {
            self.path(entry)
        };
        RunUseCase::new(Arc::new(LocalFs::new()), executor).execute(&entry, &options)
    }
}
