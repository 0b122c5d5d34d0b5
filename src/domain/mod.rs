//! Domain Layer
//!
//! The core of Save: config hierarchy, test units, verdicts and the two
//! verdict engines. Nothing here touches the disk or spawns processes
//! except through the traits in `ports/`.
//!
//! ## Structure
//!
//! - `entities/` - Config tree, test units, results, warnings
//! - `services/` - File tree walking, config resolution, diffing, warning matching
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
