//! Configuration module for Save
//!
//! Each directory of a test suite may carry a `save.toml`. A node's effective
//! configuration is its own sections merged over those of every ancestor
//! config (child wins), then validated once the whole chain is merged.

mod loader;
mod types;

pub use loader::{is_config_file, load_config, parse_config, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{
    merge_with_parents, CaptureGroups, FixAndWarnPluginConfig, FixAndWarnSettings,
    FixPluginConfig, FixResourceRole, FixSettings, GeneralConfig, GeneralSettings,
    MergeableConfig, NameSet, PluginConfig, PluginKind, PluginSettings, SuiteSettings,
    WarnPluginConfig, WarnSettings, FIX_AND_WARN_SECTION, FIX_SECTION, GENERAL_SECTION,
    WARN_SECTION,
};
