//! ProcessExecutor port - runs the external analysis tool
//!
//! The engine never spawns processes itself; timeout and sandboxing policy
//! belong to the implementation behind this trait.

use std::path::Path;

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionOutput {
    pub exit_code: i32,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

/// Command execution errors
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    /// The command could not be started at all
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command finished with a non-zero status
    #[error("command `{command}` failed with status {code}: {}", stdout.join("\n"))]
    NonZeroExit {
        command: String,
        code: i32,
        stdout: Vec<String>,
    },
}

impl ExecutionError {
    /// Stdout captured before the failure, if any
    pub fn stdout(&self) -> &[String] {
        match self {
            ExecutionError::NonZeroExit { stdout, .. } => stdout,
            ExecutionError::Spawn { .. } => &[],
        }
    }
}

/// Abstract process execution interface
///
/// Implementations:
/// - `ShellExecutor` - runs the command line through the platform shell
pub trait ProcessExecutor {
    /// Run `command` (its parts are joined with spaces into one command line).
    ///
    /// When `redirect_to` is set, captured stdout is also written to that file.
    fn execute(
        &self,
        command: &[String],
        redirect_to: Option<&Path>,
    ) -> Result<ExecutionOutput, ExecutionError>;
}
