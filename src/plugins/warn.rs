//! Warn plugin
//!
//! Each unit is one annotated source file. The tool's reported warnings are
//! matched against the warnings declared by the file's annotations.

use std::path::{Path, PathBuf};

use crate::config::{PluginKind, WarnSettings};
use crate::domain::entities::{DebugInfo, TestResult, TestUnit, Warning};
use crate::domain::services::{
    check_results, extract_actual_warnings, extract_expected_warnings, strip_annotations,
};
use crate::error::{SaveError, SaveResult};

use super::{crash, file_name, files_in, Plugin, PluginContext};

pub struct WarnPlugin {
    ctx: PluginContext,
    settings: WarnSettings,
    scratch_dir: PathBuf,
}

/// A unit ready to be handed to the tool
struct Prepared<'a> {
    unit: &'a TestUnit,
    file_name: String,
    expected: Vec<Warning>,
    tool_input: PathBuf,
}

impl WarnPlugin {
    pub fn new(ctx: PluginContext, settings: WarnSettings) -> Self {
        let scratch_dir = ctx.scratch_dir_for(PluginKind::Warn);
        Self {
            ctx,
            settings,
            scratch_dir,
        }
    }

    pub fn settings(&self) -> &WarnSettings {
        &self.settings
    }

    fn prepare<'a>(&self, unit: &'a TestUnit) -> SaveResult<Prepared<'a>> {
        let file = unit
            .last()
            .ok_or_else(|| SaveError::resource_format("empty test unit"))?;
        let lines = self.ctx.fs.read_lines(file)?;
        let file_name = file_name(file);
        let expected = extract_expected_warnings(&lines, &file_name, &self.settings)?;

        let tool_input = if self.ctx.general.ignore_save_comments {
            let copy = self.ctx.scratch_copy_path(&self.scratch_dir, file);
            let mut content = strip_annotations(&lines, &self.settings).join("\n");
            content.push('\n');
            self.ctx.fs.write(&copy, &content)?;
            copy
        } else {
            file.to_path_buf()
        };

        Ok(Prepared {
            unit,
            file_name,
            expected,
            tool_input,
        })
    }
}

impl Plugin for WarnPlugin {
    fn kind(&self) -> PluginKind {
        PluginKind::Warn
    }

    fn context(&self) -> &PluginContext {
        &self.ctx
    }

    fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    fn units_in(&self, dir: &Path) -> SaveResult<Vec<TestUnit>> {
        Ok(files_in(self.ctx.fs.as_ref(), dir)?
            .into_iter()
            .filter(|path| self.settings.is_test_resource(&file_name(path)))
            .map(TestUnit::single)
            .collect())
    }

    fn handle_units(&self, units: Vec<TestUnit>) -> SaveResult<Vec<TestResult>> {
        let mut results = Vec::with_capacity(units.len());

        for batch in units.chunks(self.settings.batch_size) {
            let mut prepared = Vec::new();
            for unit in batch {
                match self.prepare(unit) {
                    Ok(ready) => prepared.push(ready),
                    Err(err) => results.push(crash(unit, err, DebugInfo::default())),
                }
            }
            if prepared.is_empty() {
                continue;
            }

            let inputs: Vec<String> = prepared
                .iter()
                .map(|p| p.tool_input.to_string_lossy().into_owned())
                .collect();
            let command = vec![
                self.settings.exec_cmd.clone(),
                inputs.join(&self.settings.batch_separator),
            ];
            tracing::info!(command = %command.join(" "), "running warn command");

            let output = match self.ctx.executor.execute(&command, None) {
                Ok(output) => output,
                Err(err) => {
                    let debug_info = DebugInfo::from_output(err.stdout(), &[]);
                    results.extend(prepared.iter().map(|p| crash(p.unit, &err, debug_info.clone())));
                    continue;
                }
            };
            let debug_info = DebugInfo::from_output(&output.stdout, &output.stderr);
            let actual = match extract_actual_warnings(&output.stdout, &self.settings) {
                Ok(actual) => actual,
                Err(err) => {
                    results.extend(prepared.iter().map(|p| crash(p.unit, &err, debug_info.clone())));
                    continue;
                }
            };

            for ready in &prepared {
                let reported: Vec<Warning> = actual
                    .iter()
                    .filter(|w| w.file_name == ready.file_name)
                    .cloned()
                    .collect();
                let verdict =
                    check_results(&ready.expected, &reported, self.settings.exact_warnings_match);
                tracing::debug!(file = %ready.file_name, verdict = verdict.label(), "warn unit compared");
                results.push(TestResult::new(
                    ready.unit.files().to_vec(),
                    verdict,
                    debug_info.clone(),
                ));
            }
        }
        Ok(results)
    }
}
