//! Domain Services
//!
//! Business logic over domain entities. File access goes through the
//! [`FileSystem`](crate::domain::ports::FileSystem) port only.

mod config_resolver;
mod differ;
pub mod file_tree;
mod warnings;

pub use config_resolver::{ConfigResolution, ConfigResolver};
pub use differ::{Delta, DeltaKind, Differ, LineDiff};
pub use warnings::{
    check_results, extract_actual_warnings, extract_expected_warnings, resolve_line,
    strip_annotations,
};
