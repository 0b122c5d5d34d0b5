//! Shell command execution
//!
//! Implements the ProcessExecutor port by handing the joined command line to
//! the platform shell.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{ExecutionError, ExecutionOutput, ProcessExecutor};

/// Runs commands through `sh -c` (`cmd /C` on Windows)
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecutor;

impl ShellExecutor {
    pub fn new() -> Self {
        Self
    }

    fn shell_command(command_line: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command_line);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command_line);
            cmd
        }
    }
}

fn split_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

impl ProcessExecutor for ShellExecutor {
    #[tracing::instrument(level = "debug", skip_all, fields(command = %command.join(" ")))]
    fn execute(
        &self,
        command: &[String],
        redirect_to: Option<&Path>,
    ) -> Result<ExecutionOutput, ExecutionError> {
        let command_line = command.join(" ");
        let mut cmd = Self::shell_command(&command_line);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let output = cmd.output().map_err(|source| ExecutionError::Spawn {
            command: command_line.clone(),
            source,
        })?;

        if let Some(target) = redirect_to {
            std::fs::write(target, &output.stdout).map_err(|source| ExecutionError::Spawn {
                command: format!("{} > {}", command_line, target.display()),
                source,
            })?;
        }

        let stdout = split_lines(&output.stdout);
        let stderr = split_lines(&output.stderr);
        // Signal-terminated processes have no code.
        let exit_code = output.status.code().unwrap_or(-1);
        tracing::debug!(exit_code, stdout_lines = stdout.len(), "command finished");

        if !output.status.success() {
            return Err(ExecutionError::NonZeroExit {
                command: command_line,
                code: exit_code,
                stdout,
            });
        }
        Ok(ExecutionOutput {
            exit_code,
            stdout,
            stderr,
        })
    }
}
