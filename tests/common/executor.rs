//! Scripted process executor.
//!
//! Plugins only talk to the tool through `ProcessExecutor`; these doubles
//! replace the tool with a closure so scenarios stay deterministic.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use save::domain::ports::{ExecutionError, ExecutionOutput, ProcessExecutor};

type Script = dyn Fn(&[String]) -> Result<ExecutionOutput, ExecutionError> + Send + Sync;

/// Executor driven by a closure; every command line is recorded
pub struct ScriptedExecutor {
    script: Box<Script>,
    commands: Mutex<Vec<Vec<String>>>,
}

impl ScriptedExecutor {
    pub fn new(
        script: impl Fn(&[String]) -> Result<ExecutionOutput, ExecutionError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            script: Box::new(script),
            commands: Mutex::new(Vec::new()),
        }
    }

    /// Tool that succeeds silently
    pub fn silent() -> Self {
        Self::new(|_| Ok(ExecutionOutput::default()))
    }

    /// Tool that prints `lines` on stdout
    pub fn printing(lines: &[&str]) -> Self {
        let stdout: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        Self::new(move |_| {
            Ok(ExecutionOutput {
                exit_code: 0,
                stdout: stdout.clone(),
                stderr: Vec::new(),
            })
        })
    }

    /// Fixer that overwrites each file argument with `content`
    pub fn overwriting(separator: &'static str, content: &'static str) -> Self {
        Self::new(move |command| {
            for file in file_arguments(command, separator) {
                std::fs::write(file, content).unwrap();
            }
            Ok(ExecutionOutput::default())
        })
    }

    /// Tool that always exits with `code`
    pub fn failing(code: i32) -> Self {
        Self::new(move |command| {
            Err(ExecutionError::NonZeroExit {
                command: command.join(" "),
                code,
                stdout: vec!["tool crashed".to_string()],
            })
        })
    }

    pub fn commands(&self) -> Vec<Vec<String>> {
        self.commands.lock().unwrap().clone()
    }
}

impl ProcessExecutor for ScriptedExecutor {
    fn execute(
        &self,
        command: &[String],
        _redirect_to: Option<&Path>,
    ) -> Result<ExecutionOutput, ExecutionError> {
        self.commands.lock().unwrap().push(command.to_vec());
        (self.script)(command)
    }
}

/// File paths passed as the last command part
pub fn file_arguments(command: &[String], separator: &str) -> Vec<PathBuf> {
    command
        .last()
        .map(|files| files.split(separator).map(PathBuf::from).collect())
        .unwrap_or_default()
}
