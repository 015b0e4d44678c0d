//! Picker file loading and validation

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PicklistError, PicklistResult};
use crate::picker::option::{duplicate_values, find};

use super::types::{PickerConfig, PickerFile};

/// Why a warning was raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// Key not recognised; maybe a typo of `suggestion`
    UnknownKey { suggestion: Option<String> },
    /// Key is valid but has no effect with the other settings
    Ignored { reason: String },
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub kind: WarningKind,
}

/// Load a picker file and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PicklistResult<(PickerFile, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse picker file contents; `path` is only used for messages.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> PicklistResult<(PickerFile, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let file: PickerFile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PicklistError::InvalidFile {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate(&file, path)?;

    let mut warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                kind: WarningKind::UnknownKey {
                    suggestion: suggest_key(&key),
                },
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    warnings.extend(grouping_conflict(
        &file.picker,
        path,
        find_line_number(content, "group_by"),
    ));

    for warning in &warnings {
        log::debug!("{}: ignoring key '{}'", warning.file.display(), warning.key);
    }

    Ok((file, warnings))
}

/// Warn when `group_by` is set on a nested picker, where it has no effect.
///
/// Run again after command-line overrides; `line` is `None` when the
/// setting did not come from the file.
pub fn grouping_conflict(
    config: &PickerConfig,
    path: &Path,
    line: Option<usize>,
) -> Option<ConfigWarning> {
    (config.nested && config.group_by).then(|| ConfigWarning {
        key: "group_by".to_string(),
        file: path.to_path_buf(),
        line,
        kind: WarningKind::Ignored {
            reason: "grouping only applies to flat pickers (nested = true)".to_string(),
        },
    })
}

fn validate(file: &PickerFile, path: &Path) -> PicklistResult<()> {
    if let Some(value) = duplicate_values(&file.options).into_iter().next() {
        return Err(PicklistError::DuplicateValue {
            value,
            file: path.to_path_buf(),
        });
    }

    if let Some(value) = file
        .default_value
        .iter()
        .find(|value| find(&file.options, value).is_none())
    {
        return Err(PicklistError::UnknownDefaultValue {
            value: value.clone(),
            file: path.to_path_buf(),
        });
    }

    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "picker",
        "options",
        "default_value",
        "max_selected",
        "close_on_select",
        "searchable",
        "nested",
        "group_by",
        "default_expanded_keys",
        "expand_all_by_default",
        "disabled",
        "loading",
        "clearable",
        "messages",
        "placeholder",
        "search_placeholder",
        "no_options",
        "max_reached",
        "value",
        "label",
        "group",
        "children",
        "icon",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
