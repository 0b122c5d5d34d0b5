//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports) and the plugins
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RunUseCase` - Resolves the config hierarchy and runs every suite in scope

pub mod run;

pub use run::{NodeReport, PluginReport, RunOptions, RunReport, RunSummary, RunUseCase};
