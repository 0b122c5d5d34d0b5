//! Test result entity

use std::path::PathBuf;

/// Outcome of one test unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass(Option<String>),
    Fail(String),
    Ignored(String),
    Crash(String),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass(_))
    }

    /// Fail and Crash count as failures; Ignored does not
    pub fn is_failure(&self) -> bool {
        matches!(self, Verdict::Fail(_) | Verdict::Crash(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Pass(message) => message.as_deref(),
            Verdict::Fail(message) | Verdict::Ignored(message) | Verdict::Crash(message) => {
                Some(message)
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Pass(_) => "PASS",
            Verdict::Fail(_) => "FAIL",
            Verdict::Ignored(_) => "IGNORED",
            Verdict::Crash(_) => "CRASH",
        }
    }
}

/// Output captured while producing a verdict
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugInfo {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub extra: Option<String>,
}

impl DebugInfo {
    pub fn from_output(stdout: &[String], stderr: &[String]) -> Self {
        Self {
            stdout: Some(stdout.join("\n")),
            stderr: Some(stderr.join("\n")),
            extra: None,
        }
    }
}

/// Verdict for one test unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub resources: Vec<PathBuf>,
    pub verdict: Verdict,
    pub debug_info: DebugInfo,
}

impl TestResult {
    pub fn new(resources: Vec<PathBuf>, verdict: Verdict, debug_info: DebugInfo) -> Self {
        Self {
            resources,
            verdict,
            debug_info,
        }
    }
}
