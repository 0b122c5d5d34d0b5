//! Test Plugins
//!
//! A plugin discovers test units below its config node's directory, runs the
//! analysis tool over them and turns the tool's effect into verdicts.
//!
//! - `FixPlugin` - compares auto-fixed files with expected files
//! - `WarnPlugin` - compares reported warnings with annotated ones
//! - `FixAndWarnPlugin` - fix first, then check warnings on the fixed files

mod fix;
mod fix_and_warn;
mod warn;

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{GeneralSettings, PluginKind, PluginSettings, SuiteSettings};
use crate::domain::entities::{DebugInfo, TestResult, TestUnit, Verdict};
use crate::domain::ports::{FileSystem, ProcessExecutor};
use crate::domain::services::file_tree::{relative_dir, resource_directories};
use crate::error::{SaveError, SaveResult};

pub use fix::FixPlugin;
pub use fix_and_warn::FixAndWarnPlugin;
pub use warn::WarnPlugin;

/// Verdict message of units skipped through `excludedTests`
pub const EXCLUDED_MESSAGE: &str = "Excluded by configuration";

/// Everything a plugin needs from its surroundings
#[derive(Clone)]
pub struct PluginContext {
    pub fs: Arc<dyn FileSystem>,
    pub executor: Arc<dyn ProcessExecutor>,
    /// Directory of the config node the plugin runs for
    pub test_dir: PathBuf,
    /// Directory of the top-most config; scratch copies keep paths relative to it
    pub root_dir: PathBuf,
    /// Parent of every plugin scratch directory
    pub scratch_root: PathBuf,
    /// File name fragments given on the command line
    pub test_filters: Vec<String>,
    pub general: GeneralSettings,
}

impl PluginContext {
    /// Scratch directory owned by plugins of `kind`
    pub fn scratch_dir_for(&self, kind: PluginKind) -> PathBuf {
        self.scratch_root.join(kind.scratch_name())
    }

    /// Where a working copy of `file` lives inside `scratch_dir`.
    ///
    /// Suite files keep their directory relative to the root config; files that
    /// already are scratch copies keep their directory relative to the scratch root.
    pub fn scratch_copy_path(&self, scratch_dir: &Path, file: &Path) -> PathBuf {
        let name = file.file_name().unwrap_or(file.as_os_str());
        let base = if file.starts_with(&self.root_dir) {
            &self.root_dir
        } else {
            &self.scratch_root
        };
        scratch_dir.join(relative_dir(file, base)).join(name)
    }

    /// Same context with another scratch root, used by composite plugins
    pub fn nested(&self, scratch_root: PathBuf) -> Self {
        Self {
            scratch_root,
            ..self.clone()
        }
    }
}

/// Common contract of all test plugins
pub trait Plugin {
    fn kind(&self) -> PluginKind;

    fn context(&self) -> &PluginContext;

    /// Working directory cleaned at the start of every [`Plugin::execute`]
    fn scratch_dir(&self) -> &Path;

    /// Group the files directly inside `dir` into test units
    fn units_in(&self, dir: &Path) -> SaveResult<Vec<TestUnit>>;

    /// Run the tool over `units` and produce one result per unit
    fn handle_units(&self, units: Vec<TestUnit>) -> SaveResult<Vec<TestResult>>;

    /// Units owned by this plugin's config node, after command line filters
    fn discover_resources(&self) -> SaveResult<Vec<TestUnit>> {
        let ctx = self.context();
        let mut units = Vec::new();
        for dir in resource_directories(ctx.fs.as_ref(), &ctx.test_dir)? {
            units.extend(self.units_in(&dir)?);
        }
        if !ctx.test_filters.is_empty() {
            units.retain(|unit| unit.matches_any(&ctx.test_filters));
        }
        Ok(units)
    }

    /// Prepare the scratch directory, discover units and handle them
    #[tracing::instrument(skip_all, fields(plugin = %self.kind(), dir = %self.context().test_dir.display()))]
    fn execute(&self) -> SaveResult<Vec<TestResult>> {
        prepare_scratch_dir(self.context().fs.as_ref(), self.scratch_dir())?;

        let general = &self.context().general;
        let mut ignored = Vec::new();
        let mut runnable = Vec::new();
        for unit in self.discover_resources()? {
            if unit.matches_any(&general.excluded_tests) {
                ignored.push(TestResult::new(
                    unit.into_files(),
                    Verdict::Ignored(EXCLUDED_MESSAGE.to_string()),
                    DebugInfo::default(),
                ));
            } else if general.included_tests.is_empty() || unit.matches_any(&general.included_tests) {
                runnable.push(unit);
            }
        }
        tracing::debug!(runnable = runnable.len(), ignored = ignored.len(), "resources discovered");

        if runnable.is_empty() {
            return Ok(ignored);
        }
        let mut results = self.handle_units(runnable)?;
        results.extend(ignored);
        Ok(results)
    }
}

/// Instantiate one plugin per validated plugin section
pub fn build_plugins(settings: SuiteSettings, ctx: &PluginContext) -> Vec<Box<dyn Plugin>> {
    let ctx = PluginContext {
        general: settings.general,
        ..ctx.clone()
    };
    settings
        .plugins
        .into_iter()
        .filter_map(|plugin| -> Option<Box<dyn Plugin>> {
            match plugin {
                PluginSettings::General(_) => None,
                PluginSettings::Fix(fix) => Some(Box::new(FixPlugin::new(ctx.clone(), fix))),
                PluginSettings::Warn(warn) => Some(Box::new(WarnPlugin::new(ctx.clone(), warn))),
                PluginSettings::FixAndWarn(both) => {
                    Some(Box::new(FixAndWarnPlugin::new(ctx.clone(), both)))
                }
            }
        })
        .collect()
}

fn prepare_scratch_dir(fs: &dyn FileSystem, dir: &Path) -> SaveResult<()> {
    let scratch_error = |err: &dyn Display| SaveError::ScratchDir {
        path: dir.to_path_buf(),
        message: err.to_string(),
    };
    fs.remove_dir_all(dir).map_err(|e| scratch_error(&e))?;
    fs.create_dir_all(dir).map_err(|e| scratch_error(&e))
}

/// Crash result for a unit whose processing failed
pub(crate) fn crash(unit: &TestUnit, error: impl Display, debug_info: DebugInfo) -> TestResult {
    tracing::warn!(resources = ?unit.files(), %error, "test unit crashed");
    TestResult::new(
        unit.files().to_vec(),
        Verdict::Crash(error.to_string()),
        debug_info,
    )
}

/// Regular files directly inside `dir`, sorted
pub(crate) fn files_in(fs: &dyn FileSystem, dir: &Path) -> SaveResult<Vec<PathBuf>> {
    Ok(fs
        .list_dir(dir)?
        .into_iter()
        .filter(|path| fs.is_file(path))
        .collect())
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
