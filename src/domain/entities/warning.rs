//! Warning entity

use std::fmt;

/// A diagnostic, either expected (from an annotation) or reported by the tool.
///
/// Equality covers all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Warning {
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub file_name: String,
}

impl Warning {
    pub fn new(
        message: impl Into<String>,
        line: Option<usize>,
        column: Option<usize>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            line,
            column,
            file_name: file_name.into(),
        }
    }
}

fn fmt_position(value: Option<usize>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning(message={}, line={}, column={}, fileName={})",
            self.message,
            fmt_position(self.line),
            fmt_position(self.column),
            self.file_name
        )
    }
}

/// Render a list of warnings as `[w1, w2]`
pub fn format_warnings(warnings: &[Warning]) -> String {
    let items: Vec<String> = warnings.iter().map(Warning::to_string).collect();
    format!("[{}]", items.join(", "))
}
