//! Run Use Case
//!
//! Orchestrates one test run:
//! - Resolving the `save.toml` hierarchy around the entry path
//! - Merging and validating the sections of every node in scope
//! - Building and executing the plugins of each node
//! - Collecting verdicts into a report

mod options;
mod result;
mod use_case;

pub use options::RunOptions;
pub use result::{NodeReport, PluginReport, RunReport, RunSummary};
pub use use_case::RunUseCase;
