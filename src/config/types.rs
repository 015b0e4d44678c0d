//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PicklistResult;
use crate::picker::PickOption;

use super::loader::{self, ConfigWarning};

/// Literal strings shown by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Shown in the search box once something is selected
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,

    #[serde(default = "default_no_options")]
    pub no_options: String,

    #[serde(default = "default_loading")]
    pub loading: String,

    #[serde(default = "default_max_reached")]
    pub max_reached: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            search_placeholder: default_search_placeholder(),
            no_options: default_no_options(),
            loading: default_loading(),
            max_reached: default_max_reached(),
        }
    }
}

fn default_placeholder() -> String {
    "Select...".to_string()
}

fn default_search_placeholder() -> String {
    "Search...".to_string()
}

fn default_no_options() -> String {
    "No options found".to_string()
}

fn default_loading() -> String {
    "Loading...".to_string()
}

fn default_max_reached() -> String {
    "Maximum selections reached".to_string()
}

fn default_true() -> bool {
    true
}

/// Behaviour settings for a picker instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Selection cap; `None` means unlimited
    #[serde(default)]
    pub max_selected: Option<usize>,

    #[serde(default)]
    pub close_on_select: bool,

    /// Enables the search box and Backspace-removes-last
    #[serde(default = "default_true")]
    pub searchable: bool,

    /// Tree projection with expand/collapse
    #[serde(default)]
    pub nested: bool,

    /// Group flat options by their `group` label (ignored when nested)
    #[serde(default)]
    pub group_by: bool,

    #[serde(default)]
    pub default_expanded_keys: Vec<String>,

    /// Expand every branch node at mount, overriding `default_expanded_keys`
    #[serde(default)]
    pub expand_all_by_default: bool,

    #[serde(default)]
    pub disabled: bool,

    /// Passed through to the view; fetching is the caller's job
    #[serde(default)]
    pub loading: bool,

    #[serde(default = "default_true")]
    pub clearable: bool,

    #[serde(default)]
    pub messages: Messages,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            max_selected: None,
            close_on_select: false,
            searchable: true,
            nested: false,
            group_by: false,
            default_expanded_keys: Vec::new(),
            expand_all_by_default: false,
            disabled: false,
            loading: false,
            clearable: true,
            messages: Messages::default(),
        }
    }
}

impl PickerConfig {
    /// Whether grouped projection applies (grouping is flat-mode only)
    pub fn grouping_active(&self) -> bool {
        self.group_by && !self.nested
    }
}

/// A picker definition on disk: settings, options and initial selection.
///
/// ```toml
/// default_value = ["rust"]
///
/// [picker]
/// nested = true
///
/// [[options]]
/// value = "systems"
/// label = "Systems"
///
/// [[options.children]]
/// value = "rust"
/// label = "Rust"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PickerFile {
    #[serde(default)]
    pub picker: PickerConfig,

    #[serde(default)]
    pub options: Vec<PickOption>,

    /// Values of initially selected options
    #[serde(default)]
    pub default_value: Vec<String>,
}

impl PickerFile {
    /// Load and validate a picker file
    pub fn load(path: &Path) -> PicklistResult<Self> {
        loader::load_with_warnings(path).map(|(file, _)| file)
    }

    /// Load and validate, also returning non-fatal warnings
    pub fn load_with_warnings(path: &Path) -> PicklistResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve `default_value` against the option forest
    pub fn initial_selection(&self) -> Vec<PickOption> {
        self.default_value
            .iter()
            .filter_map(|value| crate::picker::option::find(&self.options, value).cloned())
            .collect()
    }
}
