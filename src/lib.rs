//! save - test framework for static analyzers
//!
//! Test suites are directories governed by `save.toml` files. Each config
//! declares plugins that run an external analysis tool over the suite's
//! resources and judge its output:
//!
//! - `[fix]` compares auto-fixed files with expected files
//! - `[warn]` compares reported warnings with warnings annotated in the sources
//! - `["fix and warn"]` does both, checking warnings on the fixed files
//!
//! Configs nest: a `save.toml` inherits every section of the configs above it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod plugins;

// Re-exports for convenience
pub use application::{RunOptions, RunReport, RunUseCase};
pub use domain::entities::{TestResult, TestUnit, Verdict, Warning};
pub use error::{SaveError, SaveResult};
pub use infrastructure::{LocalFs, ShellExecutor};
