//! Configuration type definitions
//!
//! Every record keeps its fields optional while the parent chain is merged.
//! Defaults are applied only in `validate_and_default`, which turns a raw
//! record into its fully populated settings type.

use regex::Regex;
use serde::Deserialize;

use crate::error::{SaveError, SaveResult};

pub const GENERAL_SECTION: &str = "general";
pub const FIX_SECTION: &str = "fix";
pub const WARN_SECTION: &str = "warn";
pub const FIX_AND_WARN_SECTION: &str = "fix and warn";

const DEFAULT_BATCH_SIZE: usize = 1;
const DEFAULT_BATCH_SEPARATOR: &str = ", ";
const DEFAULT_TEST_SUFFIX: &str = "Test";
const DEFAULT_EXPECTED_SUFFIX: &str = "Expected";
const DEFAULT_WARNINGS_INPUT_PATTERN: &str = r"// ;warn:(.+):(\d+): (.+)";
const DEFAULT_WARNINGS_OUTPUT_PATTERN: &str = r"(.+):(\d+):(\d+): (.+)";
const DEFAULT_LINE_PLACEHOLDER: &str = "$line";

/// Kind of a config section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluginKind {
    General,
    Fix,
    Warn,
    FixAndWarn,
}

impl PluginKind {
    /// Section name in `save.toml`
    pub fn section(&self) -> &'static str {
        match self {
            PluginKind::General => GENERAL_SECTION,
            PluginKind::Fix => FIX_SECTION,
            PluginKind::Warn => WARN_SECTION,
            PluginKind::FixAndWarn => FIX_AND_WARN_SECTION,
        }
    }

    /// Name of the scratch subdirectory owned by this plugin kind
    pub fn scratch_name(&self) -> &'static str {
        match self {
            PluginKind::General => "General",
            PluginKind::Fix => "FixPlugin",
            PluginKind::Warn => "WarnPlugin",
            PluginKind::FixAndWarn => "FixAndWarnPlugin",
        }
    }
}

impl std::fmt::Display for PluginKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.section())
    }
}

/// Merge and validation contract shared by all section records
pub trait MergeableConfig: Sized {
    /// Fully populated form produced by validation
    type Validated;

    /// Merge with the parent's record; fields present in `self` win
    fn merge(self, parent: &Self) -> Self;

    /// Apply defaults to absent fields or fail naming the missing one
    fn validate_and_default(self) -> SaveResult<Self::Validated>;
}

/// An ordered set of names.
///
/// Accepts either form in TOML:
///   tags = "codestyle, naming"
///   tags = ["codestyle", "naming"]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSet(Vec<String>);

impl NameSet {
    /// Parse a comma-separated list, dropping blanks and duplicates
    pub fn parse(text: &str) -> Self {
        Self::from_items(text.split(',').map(str::to_string))
    }

    pub fn from_items(items: impl IntoIterator<Item = String>) -> Self {
        let mut names: Vec<String> = Vec::new();
        for item in items {
            let item = item.trim();
            if !item.is_empty() && !names.iter().any(|n| n == item) {
                names.push(item.to_string());
            }
        }
        Self(names)
    }

    /// Set union; names of `self` come first
    pub fn union(&self, other: &NameSet) -> NameSet {
        Self::from_items(self.0.iter().chain(other.0.iter()).cloned())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum NameSetDe {
    List(Vec<String>),
    Text(String),
}

impl<'de> Deserialize<'de> for NameSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match NameSetDe::deserialize(deserializer)? {
            NameSetDe::List(items) => Ok(NameSet::from_items(items)),
            NameSetDe::Text(text) => Ok(NameSet::parse(&text)),
        }
    }
}

/// Merge two optional name sets: union when both exist
fn merge_name_sets(child: Option<NameSet>, parent: &Option<NameSet>) -> Option<NameSet> {
    match (child, parent) {
        (Some(child), Some(parent)) => Some(parent.union(&child)),
        (Some(child), None) => Some(child),
        (None, parent) => parent.clone(),
    }
}

fn compile_pattern(section: &str, field: &str, pattern: &str) -> SaveResult<Regex> {
    Regex::new(pattern).map_err(|source| SaveError::InvalidPattern {
        section: section.to_string(),
        field: field.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}

fn positive_batch_size(section: &str, batch_size: Option<usize>) -> SaveResult<usize> {
    match batch_size.unwrap_or(DEFAULT_BATCH_SIZE) {
        0 => Err(SaveError::InvalidValue {
            section: section.to_string(),
            field: "batchSize".to_string(),
            message: "must be at least 1".to_string(),
        }),
        n => Ok(n),
    }
}

// ============================================================================
// [general]
// ============================================================================

/// `[general]` section as written in a single `save.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralConfig {
    pub tags: Option<NameSet>,
    pub description: Option<String>,
    pub suite_name: Option<String>,
    pub excluded_tests: Option<NameSet>,
    pub included_tests: Option<NameSet>,
    pub ignore_save_comments: Option<bool>,
}

/// Validated `[general]` section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralSettings {
    pub tags: Vec<String>,
    pub description: String,
    pub suite_name: String,
    pub excluded_tests: Vec<String>,
    pub included_tests: Vec<String>,
    pub ignore_save_comments: bool,
}

impl MergeableConfig for GeneralConfig {
    type Validated = GeneralSettings;

    fn merge(self, parent: &Self) -> Self {
        Self {
            tags: merge_name_sets(self.tags, &parent.tags),
            description: self.description.or_else(|| parent.description.clone()),
            suite_name: self.suite_name.or_else(|| parent.suite_name.clone()),
            excluded_tests: merge_name_sets(self.excluded_tests, &parent.excluded_tests),
            included_tests: merge_name_sets(self.included_tests, &parent.included_tests),
            ignore_save_comments: self.ignore_save_comments.or(parent.ignore_save_comments),
        }
    }

    fn validate_and_default(self) -> SaveResult<GeneralSettings> {
        let tags = self
            .tags
            .ok_or_else(|| SaveError::missing_field(GENERAL_SECTION, "tags"))?;
        let description = self
            .description
            .ok_or_else(|| SaveError::missing_field(GENERAL_SECTION, "description"))?;
        let suite_name = self
            .suite_name
            .ok_or_else(|| SaveError::missing_field(GENERAL_SECTION, "suiteName"))?;

        Ok(GeneralSettings {
            tags: tags.into_vec(),
            description,
            suite_name,
            excluded_tests: self.excluded_tests.unwrap_or_default().into_vec(),
            included_tests: self.included_tests.unwrap_or_default().into_vec(),
            ignore_save_comments: self.ignore_save_comments.unwrap_or(false),
        })
    }
}

// ============================================================================
// [fix]
// ============================================================================

/// `[fix]` section as written in a single `save.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixPluginConfig {
    pub exec_cmd: Option<String>,
    pub batch_size: Option<usize>,
    pub batch_separator: Option<String>,
    pub resource_name_test_suffix: Option<String>,
    pub resource_name_expected_suffix: Option<String>,
}

/// Role of a file inside a fix resource pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixResourceRole {
    Test,
    Expected,
}

/// Validated `[fix]` section
#[derive(Debug, Clone)]
pub struct FixSettings {
    pub exec_cmd: String,
    pub batch_size: usize,
    pub batch_separator: String,
    pub test_suffix: String,
    pub expected_suffix: String,
    resource_name_pattern: Regex,
}

impl FixSettings {
    /// Split a resource file name into its stem and role.
    ///
    /// `Test1Expected.java` -> `("Test1", Expected)`.
    pub fn classify<'a>(&self, file_name: &'a str) -> Option<(&'a str, FixResourceRole)> {
        let caps = self.resource_name_pattern.captures(file_name)?;
        let stem = caps.get(1)?.as_str();
        let role = if caps.get(2)?.as_str() == self.expected_suffix {
            FixResourceRole::Expected
        } else {
            FixResourceRole::Test
        };
        Some((stem, role))
    }
}

impl FixPluginConfig {
    pub(crate) fn validate_in(self, section: &str) -> SaveResult<FixSettings> {
        let exec_cmd = self
            .exec_cmd
            .ok_or_else(|| SaveError::missing_field(section, "execCmd"))?;
        let batch_size = positive_batch_size(section, self.batch_size)?;
        let test_suffix = self
            .resource_name_test_suffix
            .unwrap_or_else(|| DEFAULT_TEST_SUFFIX.to_string());
        let expected_suffix = self
            .resource_name_expected_suffix
            .unwrap_or_else(|| DEFAULT_EXPECTED_SUFFIX.to_string());
        let pattern = format!(
            r"^(.+)({}|{})\.[\w\d]+$",
            regex::escape(&expected_suffix),
            regex::escape(&test_suffix)
        );
        let resource_name_pattern = compile_pattern(section, "resourceNameTestSuffix", &pattern)?;

        Ok(FixSettings {
            exec_cmd,
            batch_size,
            batch_separator: self
                .batch_separator
                .unwrap_or_else(|| DEFAULT_BATCH_SEPARATOR.to_string()),
            test_suffix,
            expected_suffix,
            resource_name_pattern,
        })
    }
}

impl MergeableConfig for FixPluginConfig {
    type Validated = FixSettings;

    fn merge(self, parent: &Self) -> Self {
        Self {
            exec_cmd: self.exec_cmd.or_else(|| parent.exec_cmd.clone()),
            batch_size: self.batch_size.or(parent.batch_size),
            batch_separator: self
                .batch_separator
                .or_else(|| parent.batch_separator.clone()),
            resource_name_test_suffix: self
                .resource_name_test_suffix
                .or_else(|| parent.resource_name_test_suffix.clone()),
            resource_name_expected_suffix: self
                .resource_name_expected_suffix
                .or_else(|| parent.resource_name_expected_suffix.clone()),
        }
    }

    fn validate_and_default(self) -> SaveResult<FixSettings> {
        self.validate_in(FIX_SECTION)
    }
}

// ============================================================================
// [warn]
// ============================================================================

/// `[warn]` section as written in a single `save.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarnPluginConfig {
    pub exec_cmd: Option<String>,
    pub warnings_input_pattern: Option<String>,
    pub warnings_output_pattern: Option<String>,
    pub warning_text_has_line: Option<bool>,
    pub warning_text_has_column: Option<bool>,
    pub batch_size: Option<usize>,
    pub batch_separator: Option<String>,
    pub line_capture_group: Option<usize>,
    pub column_capture_group: Option<usize>,
    pub message_capture_group: Option<usize>,
    pub file_name_capture_group_out: Option<usize>,
    pub line_capture_group_out: Option<usize>,
    pub column_capture_group_out: Option<usize>,
    pub message_capture_group_out: Option<usize>,
    pub exact_warnings_match: Option<bool>,
    pub test_name_suffix: Option<String>,
    pub default_line_mode: Option<bool>,
    pub line_placeholder: Option<String>,
}

/// Capture group indices for one warning pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureGroups {
    pub file_name: Option<usize>,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub message: usize,
}

/// Validated `[warn]` section
#[derive(Debug, Clone)]
pub struct WarnSettings {
    pub exec_cmd: String,
    pub warnings_input_pattern: Regex,
    pub warnings_output_pattern: Regex,
    pub batch_size: usize,
    pub batch_separator: String,
    /// Groups of the annotation pattern (no file name group)
    pub input_groups: CaptureGroups,
    /// Groups of the tool output pattern
    pub output_groups: CaptureGroups,
    pub exact_warnings_match: bool,
    pub test_name_suffix: String,
    pub default_line_mode: bool,
    pub line_placeholder: String,
    resource_name_pattern: Regex,
}

impl WarnSettings {
    /// Whether `file_name` is a warn test resource (e.g. `Test1Test.java`)
    pub fn is_test_resource(&self, file_name: &str) -> bool {
        self.resource_name_pattern.is_match(file_name)
    }

    /// Whether `line` is a warning annotation
    pub fn is_annotation(&self, line: &str) -> bool {
        self.warnings_input_pattern.is_match(line)
    }
}

/// Assigns capture group indices left to right, honouring explicit ones
struct GroupAllocator {
    next: usize,
}

impl GroupAllocator {
    fn new(first: usize) -> Self {
        Self { next: first }
    }

    fn take(&mut self, explicit: Option<usize>, enabled: bool) -> Option<usize> {
        let group = match explicit {
            Some(idx) => Some(idx),
            None if enabled => Some(self.next),
            None => None,
        };
        if let Some(idx) = group {
            self.next = self.next.max(idx + 1);
        }
        group
    }
}

fn check_groups(
    section: &str,
    field: &str,
    pattern: &Regex,
    groups: &CaptureGroups,
) -> SaveResult<()> {
    let available = pattern.captures_len() - 1;
    let indices = [groups.file_name, groups.line, groups.column, Some(groups.message)];
    match indices.into_iter().flatten().find(|&idx| idx == 0 || idx > available) {
        Some(idx) => Err(SaveError::InvalidValue {
            section: section.to_string(),
            field: field.to_string(),
            message: format!(
                "capture group {} does not exist, pattern '{}' has {} groups",
                idx,
                pattern.as_str(),
                available
            ),
        }),
        None => Ok(()),
    }
}

impl WarnPluginConfig {
    pub(crate) fn validate_in(self, section: &str) -> SaveResult<WarnSettings> {
        let exec_cmd = self
            .exec_cmd
            .ok_or_else(|| SaveError::missing_field(section, "execCmd"))?;
        let has_line = self.warning_text_has_line.unwrap_or(true);
        let has_column = self.warning_text_has_column.unwrap_or(true);
        let default_line_mode = self.default_line_mode.unwrap_or(false);

        let input_source = self
            .warnings_input_pattern
            .unwrap_or_else(|| DEFAULT_WARNINGS_INPUT_PATTERN.to_string());
        let output_source = self
            .warnings_output_pattern
            .unwrap_or_else(|| DEFAULT_WARNINGS_OUTPUT_PATTERN.to_string());
        let warnings_input_pattern =
            compile_pattern(section, "warningsInputPattern", &input_source)?;
        let warnings_output_pattern =
            compile_pattern(section, "warningsOutputPattern", &output_source)?;

        // In default line mode annotations carry no line, the following code line supplies it.
        let mut input = GroupAllocator::new(1);
        let input_groups = CaptureGroups {
            file_name: None,
            line: input.take(self.line_capture_group, has_line && !default_line_mode),
            column: input.take(self.column_capture_group, has_column),
            message: input.take(self.message_capture_group, true).unwrap_or(1),
        };

        let mut output = GroupAllocator::new(1);
        let output_groups = CaptureGroups {
            file_name: output.take(self.file_name_capture_group_out, true),
            line: output.take(self.line_capture_group_out, has_line),
            column: output.take(self.column_capture_group_out, has_column),
            message: output.take(self.message_capture_group_out, true).unwrap_or(1),
        };

        check_groups(section, "warningsInputPattern", &warnings_input_pattern, &input_groups)?;
        check_groups(section, "warningsOutputPattern", &warnings_output_pattern, &output_groups)?;

        let test_name_suffix = self
            .test_name_suffix
            .unwrap_or_else(|| DEFAULT_TEST_SUFFIX.to_string());
        let resource_name_pattern = compile_pattern(
            section,
            "testNameSuffix",
            &format!(r"^(.+){}\.[\w\d]+$", regex::escape(&test_name_suffix)),
        )?;

        Ok(WarnSettings {
            exec_cmd,
            warnings_input_pattern,
            warnings_output_pattern,
            batch_size: positive_batch_size(section, self.batch_size)?,
            batch_separator: self
                .batch_separator
                .unwrap_or_else(|| DEFAULT_BATCH_SEPARATOR.to_string()),
            input_groups,
            output_groups,
            exact_warnings_match: self.exact_warnings_match.unwrap_or(true),
            test_name_suffix,
            default_line_mode,
            line_placeholder: self
                .line_placeholder
                .unwrap_or_else(|| DEFAULT_LINE_PLACEHOLDER.to_string()),
            resource_name_pattern,
        })
    }
}

impl MergeableConfig for WarnPluginConfig {
    type Validated = WarnSettings;

    fn merge(self, parent: &Self) -> Self {
        let p = parent.clone();
        Self {
            exec_cmd: self.exec_cmd.or(p.exec_cmd),
            warnings_input_pattern: self.warnings_input_pattern.or(p.warnings_input_pattern),
            warnings_output_pattern: self.warnings_output_pattern.or(p.warnings_output_pattern),
            warning_text_has_line: self.warning_text_has_line.or(p.warning_text_has_line),
            warning_text_has_column: self.warning_text_has_column.or(p.warning_text_has_column),
            batch_size: self.batch_size.or(p.batch_size),
            batch_separator: self.batch_separator.or(p.batch_separator),
            line_capture_group: self.line_capture_group.or(p.line_capture_group),
            column_capture_group: self.column_capture_group.or(p.column_capture_group),
            message_capture_group: self.message_capture_group.or(p.message_capture_group),
            file_name_capture_group_out: self
                .file_name_capture_group_out
                .or(p.file_name_capture_group_out),
            line_capture_group_out: self.line_capture_group_out.or(p.line_capture_group_out),
            column_capture_group_out: self.column_capture_group_out.or(p.column_capture_group_out),
            message_capture_group_out: self
                .message_capture_group_out
                .or(p.message_capture_group_out),
            exact_warnings_match: self.exact_warnings_match.or(p.exact_warnings_match),
            test_name_suffix: self.test_name_suffix.or(p.test_name_suffix),
            default_line_mode: self.default_line_mode.or(p.default_line_mode),
            line_placeholder: self.line_placeholder.or(p.line_placeholder),
        }
    }

    fn validate_and_default(self) -> SaveResult<WarnSettings> {
        self.validate_in(WARN_SECTION)
    }
}

// ============================================================================
// ["fix and warn"]
// ============================================================================

/// `["fix and warn"]` section: one nested record per sub-plugin
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FixAndWarnPluginConfig {
    pub fix: Option<FixPluginConfig>,
    pub warn: Option<WarnPluginConfig>,
}

/// Validated `["fix and warn"]` section
#[derive(Debug, Clone)]
pub struct FixAndWarnSettings {
    pub fix: FixSettings,
    pub warn: WarnSettings,
}

fn merge_nested<T: MergeableConfig + Clone>(child: Option<T>, parent: &Option<T>) -> Option<T> {
    match (child, parent) {
        (Some(child), Some(parent)) => Some(child.merge(parent)),
        (Some(child), None) => Some(child),
        (None, parent) => parent.clone(),
    }
}

impl MergeableConfig for FixAndWarnPluginConfig {
    type Validated = FixAndWarnSettings;

    fn merge(self, parent: &Self) -> Self {
        Self {
            fix: merge_nested(self.fix, &parent.fix),
            warn: merge_nested(self.warn, &parent.warn),
        }
    }

    fn validate_and_default(self) -> SaveResult<FixAndWarnSettings> {
        let fix = self
            .fix
            .ok_or_else(|| SaveError::missing_field(FIX_AND_WARN_SECTION, FIX_SECTION))?
            .validate_in(&format!("{}.{}", FIX_AND_WARN_SECTION, FIX_SECTION))?;
        let warn = self
            .warn
            .ok_or_else(|| SaveError::missing_field(FIX_AND_WARN_SECTION, WARN_SECTION))?
            .validate_in(&format!("{}.{}", FIX_AND_WARN_SECTION, WARN_SECTION))?;
        Ok(FixAndWarnSettings { fix, warn })
    }
}

// ============================================================================
// Tagged union over all sections
// ============================================================================

/// One section of a `save.toml`, before validation
#[derive(Debug, Clone, PartialEq)]
pub enum PluginConfig {
    General(GeneralConfig),
    Fix(FixPluginConfig),
    Warn(WarnPluginConfig),
    FixAndWarn(FixAndWarnPluginConfig),
}

/// One validated section
#[derive(Debug, Clone)]
pub enum PluginSettings {
    General(GeneralSettings),
    Fix(FixSettings),
    Warn(WarnSettings),
    FixAndWarn(FixAndWarnSettings),
}

impl PluginConfig {
    pub fn kind(&self) -> PluginKind {
        match self {
            PluginConfig::General(_) => PluginKind::General,
            PluginConfig::Fix(_) => PluginKind::Fix,
            PluginConfig::Warn(_) => PluginKind::Warn,
            PluginConfig::FixAndWarn(_) => PluginKind::FixAndWarn,
        }
    }

    /// Merge with the parent's record of the same kind; other kinds leave `self` untouched
    pub fn merge(self, parent: &PluginConfig) -> PluginConfig {
        match (self, parent) {
            (PluginConfig::General(c), PluginConfig::General(p)) => PluginConfig::General(c.merge(p)),
            (PluginConfig::Fix(c), PluginConfig::Fix(p)) => PluginConfig::Fix(c.merge(p)),
            (PluginConfig::Warn(c), PluginConfig::Warn(p)) => PluginConfig::Warn(c.merge(p)),
            (PluginConfig::FixAndWarn(c), PluginConfig::FixAndWarn(p)) => {
                PluginConfig::FixAndWarn(c.merge(p))
            }
            (child, _) => child,
        }
    }

    pub fn validate_and_default(self) -> SaveResult<PluginSettings> {
        Ok(match self {
            PluginConfig::General(c) => PluginSettings::General(c.validate_and_default()?),
            PluginConfig::Fix(c) => PluginSettings::Fix(c.validate_and_default()?),
            PluginConfig::Warn(c) => PluginSettings::Warn(c.validate_and_default()?),
            PluginConfig::FixAndWarn(c) => PluginSettings::FixAndWarn(c.validate_and_default()?),
        })
    }
}

impl PluginSettings {
    pub fn kind(&self) -> PluginKind {
        match self {
            PluginSettings::General(_) => PluginKind::General,
            PluginSettings::Fix(_) => PluginKind::Fix,
            PluginSettings::Warn(_) => PluginKind::Warn,
            PluginSettings::FixAndWarn(_) => PluginKind::FixAndWarn,
        }
    }
}

/// Merge `parents` (nearest first) into `own`, inheriting sections the child lacks
pub fn merge_with_parents<'a>(
    own: &[PluginConfig],
    parents: impl IntoIterator<Item = &'a [PluginConfig]>,
) -> Vec<PluginConfig> {
    let mut merged: Vec<PluginConfig> = own.to_vec();
    for parent_configs in parents {
        for parent in parent_configs {
            match merged.iter().position(|c| c.kind() == parent.kind()) {
                Some(idx) => {
                    let child = merged.remove(idx);
                    merged.insert(idx, child.merge(parent));
                }
                None => merged.push(parent.clone()),
            }
        }
    }
    merged
}

/// Validated sections of one config node, ready to build plugins from
#[derive(Debug, Clone)]
pub struct SuiteSettings {
    pub general: GeneralSettings,
    pub plugins: Vec<PluginSettings>,
}

impl SuiteSettings {
    /// Validate a fully merged section list; `[general]` is mandatory
    pub fn from_merged(location: &std::path::Path, merged: Vec<PluginConfig>) -> SaveResult<Self> {
        let mut general = None;
        let mut plugins = Vec::new();
        for config in merged {
            match config.validate_and_default()? {
                PluginSettings::General(settings) => general = Some(settings),
                other => plugins.push(other),
            }
        }
        let general = general.ok_or_else(|| SaveError::MissingSection {
            section: GENERAL_SECTION.to_string(),
            location: location.to_path_buf(),
        })?;
        plugins.sort_by_key(PluginSettings::kind);
        Ok(Self { general, plugins })
    }
}
