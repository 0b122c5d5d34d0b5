//! Warning extraction and matching
//!
//! Expected warnings come from annotation lines inside test resources, actual
//! warnings from the tool's output. Both are parsed with the patterns and
//! capture groups of [`WarnSettings`].

use std::path::Path;

use regex::Captures;

use crate::config::WarnSettings;
use crate::domain::entities::{format_warnings, Verdict, Warning};
use crate::error::{SaveError, SaveResult};

/// Expected warnings declared by the annotation lines of one resource.
///
/// Line numbers are 1-based. In default line mode the annotation targets the
/// next non-annotation line.
pub fn extract_expected_warnings(
    lines: &[String],
    file_name: &str,
    settings: &WarnSettings,
) -> SaveResult<Vec<Warning>> {
    let groups = settings.input_groups;
    let mut warnings = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let Some(caps) = settings.warnings_input_pattern.captures(line) else {
            continue;
        };
        let line_number = if settings.default_line_mode {
            Some(next_code_line(lines, index, settings))
        } else {
            match groups.line.and_then(|g| caps.get(g)) {
                Some(token) => Some(resolve_line(
                    token.as_str(),
                    &settings.line_placeholder,
                    index + 1,
                )?),
                None => None,
            }
        };
        let column = optional_number(&caps, groups.column, "column")?;
        let message = required_group(&caps, groups.message, "message")?;

        warnings.push(Warning::new(message.trim(), line_number, column, file_name));
    }
    Ok(warnings)
}

/// Warnings reported by the tool, one per matching output line
pub fn extract_actual_warnings(
    output: &[String],
    settings: &WarnSettings,
) -> SaveResult<Vec<Warning>> {
    let groups = settings.output_groups;
    let mut warnings = Vec::new();

    for (index, line) in output.iter().enumerate() {
        let Some(caps) = settings.warnings_output_pattern.captures(line) else {
            continue;
        };
        let file_name = match groups.file_name {
            Some(group) => base_name(required_group(&caps, group, "file name")?),
            None => {
                return Err(SaveError::resource_format(
                    "warningsOutputPattern has no file name group",
                ))
            }
        };
        let line_number = match groups.line {
            Some(group) => optional_number(&caps, Some(group), "line")?,
            None if settings.default_line_mode => Some(index + 1),
            None => None,
        };
        let column = optional_number(&caps, groups.column, "column")?;
        let message = required_group(&caps, groups.message, "message")?;

        warnings.push(Warning::new(message.trim(), line_number, column, file_name));
    }
    Ok(warnings)
}

/// Resolve a line token that is either a number or a placeholder expression.
///
/// `$line` alone points at the annotation itself, `$line+N` / `$line-N` at a
/// line relative to it.
pub fn resolve_line(token: &str, placeholder: &str, annotation_line: usize) -> SaveResult<usize> {
    let token = token.trim();
    if let Ok(number) = token.parse::<usize>() {
        return Ok(number);
    }

    let marker = placeholder.chars().next();
    if marker.is_none() || token.chars().next() != marker {
        return Err(SaveError::InvalidPlaceholder {
            token: token.to_string(),
            placeholder: placeholder.to_string(),
        });
    }
    let offset = token.strip_prefix(placeholder).ok_or_else(|| {
        SaveError::resource_format(format!(
            "line token '{}' does not start with placeholder '{}'",
            token, placeholder
        ))
    })?;
    let offset: i64 = if offset.is_empty() {
        0
    } else {
        offset.parse().map_err(|_| {
            SaveError::resource_format(format!("invalid line offset '{}' in '{}'", offset, token))
        })?
    };

    let resolved = annotation_line as i64 + offset;
    usize::try_from(resolved)
        .ok()
        .filter(|line| *line >= 1)
        .ok_or_else(|| SaveError::resource_format(format!("line token '{}' resolves to {}", token, resolved)))
}

/// Compare expected and actual warnings.
///
/// Warnings are compared as sets. Unexpected warnings only fail the unit when
/// `exact_match` is set; missing warnings always do.
pub fn check_results(expected: &[Warning], actual: &[Warning], exact_match: bool) -> Verdict {
    let missing = difference(expected, actual);
    let unexpected = difference(actual, expected);

    match (missing.is_empty(), unexpected.is_empty()) {
        (true, true) => Verdict::Pass(None),
        (true, false) => {
            let message = format!(
                "Some warnings were unexpected: {}",
                format_warnings(&unexpected)
            );
            if exact_match {
                Verdict::Fail(message)
            } else {
                Verdict::Pass(Some(message))
            }
        }
        (false, true) => Verdict::Fail(format!(
            "Some warnings were expected but not received: {}",
            format_warnings(&missing)
        )),
        (false, false) => Verdict::Fail(format!(
            "Some warnings were expected but not received: {}, and others were unexpected: {}",
            format_warnings(&missing),
            format_warnings(&unexpected)
        )),
    }
}

/// `lines` without any annotation line
pub fn strip_annotations(lines: &[String], settings: &WarnSettings) -> Vec<String> {
    lines
        .iter()
        .filter(|line| !settings.is_annotation(line))
        .cloned()
        .collect()
}

/// Items of `left` absent from `right`, first occurrence order
fn difference(left: &[Warning], right: &[Warning]) -> Vec<Warning> {
    let mut result: Vec<Warning> = Vec::new();
    for warning in left {
        if !right.contains(warning) && !result.contains(warning) {
            result.push(warning.clone());
        }
    }
    result
}

/// 1-based number of the first non-annotation line after `index`
fn next_code_line(lines: &[String], index: usize, settings: &WarnSettings) -> usize {
    lines
        .iter()
        .enumerate()
        .skip(index + 1)
        .find(|(_, line)| !settings.is_annotation(line))
        .map_or(lines.len() + 1, |(position, _)| position + 1)
}

fn required_group<'t>(caps: &Captures<'t>, group: usize, what: &str) -> SaveResult<&'t str> {
    caps.get(group)
        .map(|m| m.as_str())
        .ok_or_else(|| SaveError::resource_format(format!("no {} captured in group {}", what, group)))
}

fn optional_number(caps: &Captures<'_>, group: Option<usize>, what: &str) -> SaveResult<Option<usize>> {
    let Some(text) = group.and_then(|g| caps.get(g)).map(|m| m.as_str().trim()) else {
        return Ok(None);
    };
    text.parse()
        .map(Some)
        .map_err(|_| SaveError::resource_format(format!("{} '{}' is not a number", what, text)))
}

fn base_name(reported: &str) -> String {
    let reported = reported.trim();
    Path::new(reported)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| reported.to_string())
}
