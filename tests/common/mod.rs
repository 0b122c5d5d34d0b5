//! Common test utilities for save scenario tests.
//!
//! This module provides:
//! - `Suite`: a temp directory tree of configs and resources
//! - `ScriptedExecutor`: an in-process stand-in for the analysis tool
//! - Fixtures: reusable `save.toml` snippets

#![allow(dead_code)]

pub mod executor;
pub mod fixtures;
pub mod suite;

pub use executor::*;
pub use fixtures::*;
pub use suite::*;
