//! Run Use Case
//!
//! Resolves the config hierarchy and executes every node in scope.

use std::path::Path;
use std::sync::Arc;

use crate::config::{is_config_file, SuiteSettings};
use crate::domain::ports::{FileSystem, ProcessExecutor};
use crate::domain::services::ConfigResolver;
use crate::error::SaveResult;
use crate::plugins::{build_plugins, PluginContext};

use super::options::RunOptions;
use super::result::{NodeReport, PluginReport, RunReport};

/// Run use case - executes the test suites found around an entry path
pub struct RunUseCase {
    fs: Arc<dyn FileSystem>,
    executor: Arc<dyn ProcessExecutor>,
}

impl RunUseCase {
    pub fn new(fs: Arc<dyn FileSystem>, executor: Arc<dyn ProcessExecutor>) -> Self {
        Self { fs, executor }
    }

    /// Run the node governing `entry` and every node nested below it.
    ///
    /// When `entry` is a single resource file only its own node runs, and only
    /// the unit containing that file; command line filters are replaced.
    /// Ancestor configs only contribute inherited settings. Config and scratch
    /// directory errors abort the run; per-unit failures are reported as
    /// verdicts.
    #[tracing::instrument(skip_all, fields(entry = %entry.display()))]
    pub fn execute(&self, entry: &Path, options: &RunOptions) -> SaveResult<RunReport> {
        let resolution = ConfigResolver::new(self.fs.as_ref()).resolve(entry)?;
        for warning in &resolution.warnings {
            tracing::warn!("{}", warning);
        }

        let tree = &resolution.tree;
        let root_dir = tree
            .get(tree.root_of(resolution.target))
            .directory()
            .to_path_buf();

        let resource_entry =
            self.fs.is_file(&resolution.entry) && !is_config_file(&resolution.entry);
        let (node_ids, test_filters) = if resource_entry {
            tracing::debug!(resource = %resolution.entry.display(), "running a single resource");
            (
                vec![resolution.target],
                vec![resolution.entry.to_string_lossy().into_owned()],
            )
        } else {
            (tree.subtree(resolution.target), options.test_filters.clone())
        };

        let mut report = RunReport {
            nodes: Vec::new(),
            config_warnings: resolution.warnings.clone(),
        };
        for id in node_ids {
            let node = tree.get(id);
            let settings = SuiteSettings::from_merged(node.location(), tree.merged_configs(id))?;
            tracing::info!(
                suite = %settings.general.suite_name,
                config = %node.location().display(),
                plugins = settings.plugins.len(),
                "running suite"
            );

            let ctx = PluginContext {
                fs: Arc::clone(&self.fs),
                executor: Arc::clone(&self.executor),
                test_dir: node.directory().to_path_buf(),
                root_dir: root_dir.clone(),
                scratch_root: options.scratch_dir.clone(),
                test_filters: test_filters.clone(),
                general: settings.general.clone(),
            };
            let suite_name = settings.general.suite_name.clone();

            let mut plugins = Vec::new();
            for plugin in build_plugins(settings, &ctx) {
                let results = plugin.execute()?;
                plugins.push(PluginReport {
                    kind: plugin.kind(),
                    results,
                });
            }
            report.nodes.push(NodeReport {
                location: node.location().to_path_buf(),
                suite_name,
                plugins,
            });
        }

        tracing::info!(summary = %report.summary(), "run finished");
        Ok(report)
    }
}
