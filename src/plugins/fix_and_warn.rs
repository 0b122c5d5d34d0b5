//! Fix-and-warn plugin
//!
//! Runs the fix tool over `[expected, test]` pairs, then the warn tool over
//! the fixed copies. Annotations are stripped from the expected files while
//! the fixer runs so that the diff only sees code; the files are restored
//! afterwards whatever the outcome.

use std::path::{Path, PathBuf};

use crate::config::{FixAndWarnSettings, PluginKind};
use crate::domain::entities::{TestResult, TestUnit};
use crate::domain::services::strip_annotations;
use crate::error::SaveResult;

use super::{file_name, FixPlugin, Plugin, PluginContext, WarnPlugin};

pub struct FixAndWarnPlugin {
    ctx: PluginContext,
    scratch_dir: PathBuf,
    fix: FixPlugin,
    warn: WarnPlugin,
}

impl FixAndWarnPlugin {
    pub fn new(ctx: PluginContext, settings: FixAndWarnSettings) -> Self {
        let scratch_dir = ctx.scratch_dir_for(PluginKind::FixAndWarn);
        let nested = ctx.nested(scratch_dir.clone());
        Self {
            fix: FixPlugin::new(nested.clone(), settings.fix),
            warn: WarnPlugin::new(nested, settings.warn),
            ctx,
            scratch_dir,
        }
    }

    /// Remove annotation lines from `files` in place, returning original contents
    fn strip_expected_files(&self, files: &[PathBuf]) -> SaveResult<Vec<(PathBuf, String)>> {
        let mut originals = Vec::with_capacity(files.len());
        for file in files {
            let stripped = self.ctx.fs.read(file).and_then(|original| {
                let lines: Vec<String> = original.lines().map(str::to_string).collect();
                let mut content = strip_annotations(&lines, self.warn.settings()).join("\n");
                content.push('\n');
                self.ctx.fs.write(file, &content)?;
                Ok(original)
            });
            match stripped {
                Ok(original) => originals.push((file.clone(), original)),
                Err(err) => {
                    self.restore(&originals)?;
                    return Err(err.into());
                }
            }
        }
        Ok(originals)
    }

    fn restore(&self, originals: &[(PathBuf, String)]) -> SaveResult<()> {
        for (file, content) in originals {
            self.ctx.fs.write(file, content)?;
        }
        Ok(())
    }
}

impl Plugin for FixAndWarnPlugin {
    fn kind(&self) -> PluginKind {
        PluginKind::FixAndWarn
    }

    fn context(&self) -> &PluginContext {
        &self.ctx
    }

    fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    fn units_in(&self, dir: &Path) -> SaveResult<Vec<TestUnit>> {
        self.fix.units_in(dir)
    }

    fn handle_units(&self, units: Vec<TestUnit>) -> SaveResult<Vec<TestResult>> {
        let warn_settings = self.warn.settings();
        let (tests, expected): (Vec<PathBuf>, Vec<PathBuf>) = units
            .iter()
            .flat_map(|unit| unit.files().iter().cloned())
            .partition(|file| warn_settings.is_test_resource(&file_name(file)));

        let originals = self.strip_expected_files(&expected)?;
        let fix_results = self.fix.handle_units(units);
        self.restore(&originals)?;
        let fix_results = fix_results?;

        let fixed_copies: Vec<TestUnit> = tests
            .iter()
            .map(|test| TestUnit::single(self.fix.fixed_copy_path(test)))
            .collect();
        tracing::debug!(files = fixed_copies.len(), "checking warnings on fixed copies");
        let warn_results = self.warn.handle_units(fixed_copies)?;

        Ok(fix_results.into_iter().chain(warn_results).collect())
    }
}
