//! Run result types

use std::fmt;
use std::path::PathBuf;

use crate::config::{ConfigWarning, PluginKind};
use crate::domain::entities::{TestResult, Verdict};

/// Results of one plugin of one config node
#[derive(Debug, Clone)]
pub struct PluginReport {
    pub kind: PluginKind,
    pub results: Vec<TestResult>,
}

/// Everything executed for one `save.toml`
#[derive(Debug, Clone)]
pub struct NodeReport {
    /// Path of the `save.toml`
    pub location: PathBuf,
    pub suite_name: String,
    pub plugins: Vec<PluginReport>,
}

/// Verdict counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub ignored: usize,
    pub crashed: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.ignored + self.crashed
    }

    fn record(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::Pass(_) => self.passed += 1,
            Verdict::Fail(_) => self.failed += 1,
            Verdict::Ignored(_) => self.ignored += 1,
            Verdict::Crash(_) => self.crashed += 1,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tests: {} passed, {} failed, {} crashed, {} ignored",
            self.total(),
            self.passed,
            self.failed,
            self.crashed,
            self.ignored
        )
    }
}

/// Result of a run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub nodes: Vec<NodeReport>,
    /// Unknown keys found in any loaded `save.toml`
    pub config_warnings: Vec<ConfigWarning>,
}

impl RunReport {
    /// Every test result in execution order
    pub fn results(&self) -> impl Iterator<Item = &TestResult> {
        self.nodes
            .iter()
            .flat_map(|node| node.plugins.iter())
            .flat_map(|plugin| plugin.results.iter())
    }

    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for result in self.results() {
            summary.record(&result.verdict);
        }
        summary
    }

    /// No Fail or Crash verdict anywhere
    pub fn is_success(&self) -> bool {
        self.results().all(|result| !result.verdict.is_failure())
    }
}
