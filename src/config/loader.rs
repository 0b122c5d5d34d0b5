//! `save.toml` loading

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::ports::FileSystem;
use crate::error::{SaveError, SaveResult};

use super::types::{
    FixAndWarnPluginConfig, FixPluginConfig, GeneralConfig, PluginConfig, WarnPluginConfig,
};

/// File name of a test suite config
pub const CONFIG_FILE_NAME: &str = "save.toml";

/// Whether `path` names a `save.toml`
pub fn is_config_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == CONFIG_FILE_NAME)
}

/// Non-fatal configuration warning (e.g. an unknown key)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())
    }
}

#[derive(Debug, Default, Deserialize)]
struct SaveToml {
    general: Option<GeneralConfig>,
    fix: Option<FixPluginConfig>,
    warn: Option<WarnPluginConfig>,
    #[serde(rename = "fix and warn")]
    fix_and_warn: Option<FixAndWarnPluginConfig>,
}

impl SaveToml {
    fn into_plugin_configs(self) -> Vec<PluginConfig> {
        let mut configs = Vec::new();
        if let Some(general) = self.general {
            configs.push(PluginConfig::General(general));
        }
        if let Some(fix) = self.fix {
            configs.push(PluginConfig::Fix(fix));
        }
        if let Some(warn) = self.warn {
            configs.push(PluginConfig::Warn(warn));
        }
        if let Some(fix_and_warn) = self.fix_and_warn {
            configs.push(PluginConfig::FixAndWarn(fix_and_warn));
        }
        configs
    }
}

/// Parse the content of a `save.toml`, collecting unknown keys as warnings
pub fn parse_config(content: &str, file: &Path) -> SaveResult<(Vec<PluginConfig>, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let parsed: SaveToml = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SaveError::InvalidConfig {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            key,
            file: file.to_path_buf(),
        })
        .collect();

    Ok((parsed.into_plugin_configs(), warnings))
}

/// Read and parse a `save.toml`
pub fn load_config(
    fs: &dyn FileSystem,
    file: &Path,
) -> SaveResult<(Vec<PluginConfig>, Vec<ConfigWarning>)> {
    let content = fs.read(file)?;
    parse_config(&content, file)
}
