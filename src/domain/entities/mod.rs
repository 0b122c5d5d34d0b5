//! Domain Entities
//!
//! - `ConfigTree` / `ConfigNode` - the discovered `save.toml` hierarchy
//! - `TestUnit` - resource files of one logical test
//! - `TestResult` / `Verdict` - outcome of one test unit
//! - `Warning` - a diagnostic expected by an annotation or reported by a tool

mod config_tree;
mod test_result;
mod test_unit;
mod warning;

pub use config_tree::{ConfigId, ConfigNode, ConfigTree};
pub use test_result::{DebugInfo, TestResult, Verdict};
pub use test_unit::TestUnit;
pub use warning::{format_warnings, Warning};
