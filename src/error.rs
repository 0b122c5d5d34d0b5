//! Error types for Save
//!
//! Uses `thiserror` for library errors. Structural failures (config tree,
//! validation, scratch directories) surface as [`SaveError`]; failures that
//! belong to a single test unit are turned into `Crash` verdicts by the plugins.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for Save operations
pub type SaveResult<T> = Result<T, SaveError>;

/// Main error type for Save operations
#[derive(Error, Debug)]
pub enum SaveError {
    /// No `save.toml` exists for the entry point or any of its ancestors
    #[error("no save.toml found for '{path}' or any of its parent directories")]
    ConfigNotFound { path: PathBuf },

    /// A field is still absent after the whole parent chain has been merged
    #[error("couldn't find `{field}` in [{section}] section; provide it in this config or in one of the parent configs")]
    MissingRequiredField { section: String, field: String },

    /// A mandatory section is absent from the merged config chain
    #[error("[{section}] section is missing in {location} and all of its parent configs")]
    MissingSection { section: String, location: PathBuf },

    /// The config document could not be parsed
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A configured regular expression does not compile
    #[error("invalid pattern for `{field}` in [{section}] section '{pattern}': {source}")]
    InvalidPattern {
        section: String,
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A field has a value outside of its allowed range
    #[error("invalid value for `{field}` in [{section}] section: {message}")]
    InvalidValue {
        section: String,
        field: String,
        message: String,
    },

    /// The plugin scratch directory could not be cleaned or created
    #[error("could not prepare scratch directory {path}: {message}")]
    ScratchDir { path: PathBuf, message: String },

    /// The resource naming convention produced a group of unexpected size
    #[error("files should be grouped in pairs, but for name '{stem}' these files have been discovered: {files:?}")]
    MalformedResourceGroup { stem: String, files: Vec<PathBuf> },

    /// A warning line could not be parsed
    #[error("{message}")]
    ResourceFormat { message: String },

    /// A line token is neither a number nor the configured placeholder
    #[error("the group <{token}> is neither a number nor a placeholder '{placeholder}'")]
    InvalidPlaceholder { token: String, placeholder: String },

    /// File system failure
    #[error(transparent)]
    Fs(#[from] FsError),
}

impl SaveError {
    pub fn missing_field(section: &str, field: &str) -> Self {
        SaveError::MissingRequiredField {
            section: section.to_string(),
            field: field.to_string(),
        }
    }

    pub fn resource_format(message: impl Into<String>) -> Self {
        SaveError::ResourceFormat {
            message: message.into(),
        }
    }
}
