//! Differ Domain Service
//!
//! Line-based comparison of an expected file against the output of a fixer.

use std::fmt;

use similar::{capture_diff_slices, Algorithm, DiffOp};

use crate::domain::entities::Verdict;

/// Kind of a single hunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaKind {
    /// Lines replaced by other lines
    Change,
    /// Lines only present in the expected file
    Delete,
    /// Lines only present in the fixed file
    Insert,
}

impl fmt::Display for DeltaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeltaKind::Change => "ChangeDelta",
            DeltaKind::Delete => "DeleteDelta",
            DeltaKind::Insert => "InsertDelta",
        };
        f.write_str(name)
    }
}

/// One hunk of a line diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delta {
    pub kind: DeltaKind,
    /// Zero-based index of the first affected expected line
    pub position: usize,
    pub old_lines: Vec<String>,
    pub new_lines: Vec<String>,
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, position {}, lines:", self.kind, self.position)?;
        let rows = self.old_lines.len().max(self.new_lines.len());
        for row in 0..rows {
            if let Some(old) = self.old_lines.get(row) {
                write!(f, "\n-[{}]", old)?;
            }
            if let Some(new) = self.new_lines.get(row) {
                write!(f, "\n+<{}>", new)?;
            }
        }
        Ok(())
    }
}

/// Result of a diff operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineDiff {
    pub deltas: Vec<Delta>,
}

impl LineDiff {
    pub fn has_changes(&self) -> bool {
        !self.deltas.is_empty()
    }

    /// Human readable rendering, one delta per paragraph
    pub fn render(&self) -> String {
        self.deltas
            .iter()
            .map(Delta::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Pass when nothing differs, otherwise Fail with the rendered deltas
    pub fn verdict(&self) -> Verdict {
        if self.has_changes() {
            Verdict::Fail(self.render())
        } else {
            Verdict::Pass(None)
        }
    }
}

/// Differ service for computing file differences
#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    pub fn new() -> Self {
        Self
    }

    /// Compute the line diff from `expected` to `actual`
    pub fn diff_lines(&self, expected: &[String], actual: &[String]) -> LineDiff {
        let deltas = capture_diff_slices(Algorithm::Myers, expected, actual)
            .into_iter()
            .filter_map(|op| match op {
                DiffOp::Equal { .. } => None,
                DiffOp::Delete {
                    old_index, old_len, ..
                } => Some(Delta {
                    kind: DeltaKind::Delete,
                    position: old_index,
                    old_lines: expected[old_index..old_index + old_len].to_vec(),
                    new_lines: Vec::new(),
                }),
                DiffOp::Insert {
                    old_index,
                    new_index,
                    new_len,
                } => Some(Delta {
                    kind: DeltaKind::Insert,
                    position: old_index,
                    old_lines: Vec::new(),
                    new_lines: actual[new_index..new_index + new_len].to_vec(),
                }),
                DiffOp::Replace {
                    old_index,
                    old_len,
                    new_index,
                    new_len,
                } => Some(Delta {
                    kind: DeltaKind::Change,
                    position: old_index,
                    old_lines: expected[old_index..old_index + old_len].to_vec(),
                    new_lines: actual[new_index..new_index + new_len].to_vec(),
                }),
            })
            .collect();
        LineDiff { deltas }
    }
}
