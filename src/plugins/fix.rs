//! Fix plugin
//!
//! Each unit is a pair `[expected, test]`. The tool rewrites a scratch copy of
//! the test file in place; the copy is then diffed against the expected file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::{FixResourceRole, FixSettings, PluginKind};
use crate::domain::entities::{DebugInfo, TestResult, TestUnit};
use crate::domain::ports::ExecutionOutput;
use crate::domain::services::Differ;
use crate::error::{SaveError, SaveResult};

use super::{crash, file_name, files_in, Plugin, PluginContext};

pub struct FixPlugin {
    ctx: PluginContext,
    settings: FixSettings,
    scratch_dir: PathBuf,
    differ: Differ,
}

impl FixPlugin {
    pub fn new(ctx: PluginContext, settings: FixSettings) -> Self {
        let scratch_dir = ctx.scratch_dir_for(PluginKind::Fix);
        Self {
            ctx,
            settings,
            scratch_dir,
            differ: Differ::new(),
        }
    }

    pub fn settings(&self) -> &FixSettings {
        &self.settings
    }

    /// Location of the tool's working copy of `test_file`
    pub fn fixed_copy_path(&self, test_file: &Path) -> PathBuf {
        self.ctx.scratch_copy_path(&self.scratch_dir, test_file)
    }

    fn copy_to_scratch(&self, test_file: &Path) -> SaveResult<PathBuf> {
        let copy = self.fixed_copy_path(test_file);
        let content = self.ctx.fs.read(test_file)?;
        self.ctx.fs.write(&copy, &content)?;
        Ok(copy)
    }

    fn compare(&self, unit: &TestUnit, output: &ExecutionOutput) -> TestResult {
        let debug_info = DebugInfo::from_output(&output.stdout, &output.stderr);
        let (Some(expected), Some(test)) = (unit.first(), unit.last()) else {
            return crash(unit, "empty test unit", debug_info);
        };
        let read_both = || -> SaveResult<(Vec<String>, Vec<String>)> {
            let expected = self.ctx.fs.read_lines(expected)?;
            let fixed = self.ctx.fs.read_lines(&self.fixed_copy_path(test))?;
            Ok((expected, fixed))
        };
        match read_both() {
            Ok((expected, fixed)) => {
                let verdict = self.differ.diff_lines(&expected, &fixed).verdict();
                tracing::debug!(test = %test.display(), verdict = verdict.label(), "fix unit compared");
                TestResult::new(unit.files().to_vec(), verdict, debug_info)
            }
            Err(err) => crash(unit, err, debug_info),
        }
    }
}

impl Plugin for FixPlugin {
    fn kind(&self) -> PluginKind {
        PluginKind::Fix
    }

    fn context(&self) -> &PluginContext {
        &self.ctx
    }

    fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    /// Pair `<stem><expected suffix>.<ext>` with `<stem><test suffix>.<ext>`.
    ///
    /// Stems with a single file are skipped; any other group size is an error.
    fn units_in(&self, dir: &Path) -> SaveResult<Vec<TestUnit>> {
        let mut groups: BTreeMap<String, Vec<(PathBuf, FixResourceRole)>> = BTreeMap::new();
        for path in files_in(self.ctx.fs.as_ref(), dir)? {
            let name = file_name(&path);
            if let Some((stem, role)) = self.settings.classify(&name) {
                groups.entry(stem.to_string()).or_default().push((path, role));
            }
        }

        let mut units = Vec::new();
        for (stem, mut members) in groups {
            match members.len() {
                1 => tracing::debug!(stem = %stem, "unpaired fix resource skipped"),
                2 => {
                    members.sort_by_key(|(_, role)| *role != FixResourceRole::Expected);
                    if members[0].1 == members[1].1 {
                        return Err(malformed(stem, members));
                    }
                    units.push(TestUnit::new(members.into_iter().map(|(p, _)| p).collect()));
                }
                _ => return Err(malformed(stem, members)),
            }
        }
        Ok(units)
    }

    fn handle_units(&self, units: Vec<TestUnit>) -> SaveResult<Vec<TestResult>> {
        let mut results = Vec::with_capacity(units.len());

        for batch in units.chunks(self.settings.batch_size) {
            let mut ready = Vec::new();
            let mut copies = Vec::new();
            for unit in batch {
                let Some(test) = unit.last() else {
                    results.push(crash(unit, "empty test unit", DebugInfo::default()));
                    continue;
                };
                match self.copy_to_scratch(test) {
                    Ok(copy) => {
                        copies.push(copy.to_string_lossy().into_owned());
                        ready.push(unit);
                    }
                    Err(err) => results.push(crash(unit, err, DebugInfo::default())),
                }
            }
            if ready.is_empty() {
                continue;
            }

            let command = vec![
                self.settings.exec_cmd.clone(),
                copies.join(&self.settings.batch_separator),
            ];
            tracing::info!(command = %command.join(" "), "running fix command");
            match self.ctx.executor.execute(&command, None) {
                Ok(output) => results.extend(ready.into_iter().map(|unit| self.compare(unit, &output))),
                Err(err) => {
                    let debug_info = DebugInfo::from_output(err.stdout(), &[]);
                    results.extend(ready.into_iter().map(|unit| crash(unit, &err, debug_info.clone())));
                }
            }
        }
        Ok(results)
    }
}

fn malformed(stem: String, members: Vec<(PathBuf, FixResourceRole)>) -> SaveError {
    SaveError::MalformedResourceGroup {
        stem,
        files: members.into_iter().map(|(path, _)| path).collect(),
    }
}
