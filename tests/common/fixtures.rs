//! Test fixtures - reusable `save.toml` content.

/// Complete `[general]` section
pub const GENERAL: &str = r#"
[general]
tags = ["smoke"]
description = "scenario suite"
suiteName = "Scenario"
"#;

/// `[fix]` section with default naming
pub const FIX: &str = r#"
[fix]
execCmd = "fixer"
"#;

/// `[warn]` section with default patterns
pub const WARN: &str = r#"
[warn]
execCmd = "linter"
"#;

/// Composite section with default sub-sections
pub const FIX_AND_WARN: &str = r#"
["fix and warn"]
[ "fix and warn".fix ]
execCmd = "fixer"
[ "fix and warn".warn ]
execCmd = "linter"
"#;
