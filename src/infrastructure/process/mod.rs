//! Process Execution
//!
//! Concrete implementations of the ProcessExecutor port.

mod shell;

pub use shell::ShellExecutor;
