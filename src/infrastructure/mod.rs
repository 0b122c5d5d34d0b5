//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (Local)
//! - `process/` - External tool execution (Shell)

pub mod fs;
pub mod process;

// Re-export for convenience
pub use fs::LocalFs;
pub use process::ShellExecutor;
