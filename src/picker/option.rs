//! Option tree model.
//!
//! Options form an immutable forest. Every `value` is expected to be unique
//! across the whole forest; lookups are first-match-wins in depth-first
//! pre-order so duplicates never crash, they just shadow later entries.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A selectable entry in the picklist, optionally with nested children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickOption {
    /// Identity key used for selection, expansion and list keys
    pub value: String,
    /// Display and search text
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    /// Group heading used by grouped (flat) rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PickOption>,
    /// Opaque payload handed back to the presentation layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl PickOption {
    /// Create an enabled, ungrouped leaf option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            group: None,
            children: Vec::new(),
            icon: None,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = PickOption>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Whether this node has at least one child
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Case-insensitive substring match of the label against `query`.
    ///
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        SearchQuery::new(query).matches(self)
    }
}

/// A search query lowercased once so projection doesn't redo it per node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, option: &PickOption) -> bool {
        self.needle.is_empty() || option.label.to_lowercase().contains(&self.needle)
    }

    /// True when any transitive descendant of `option` matches.
    ///
    /// Pure existence check over the full subtree: selection and expansion
    /// state play no part.
    pub fn subtree_matches(&self, option: &PickOption) -> bool {
        option
            .children
            .iter()
            .any(|child| self.matches(child) || self.subtree_matches(child))
    }
}

/// True when any descendant of `option` has a label matching `query`
pub fn subtree_matches(option: &PickOption, query: &str) -> bool {
    SearchQuery::new(query).subtree_matches(option)
}

/// Depth-first pre-order walk over a forest, yielding `(depth, option)`
pub fn walk(forest: &[PickOption]) -> Walk<'_> {
    Walk {
        stack: forest.iter().rev().map(|option| (0, option)).collect(),
    }
}

/// Iterator returned by [`walk`]
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a PickOption)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a PickOption);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, option) = self.stack.pop()?;
        self.stack
            .extend(option.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, option))
    }
}

/// Values of every node that has at least one child, in pre-order.
///
/// Used to seed "expand all by default".
pub fn branch_keys(forest: &[PickOption]) -> Vec<String> {
    walk(forest)
        .filter(|(_, option)| option.has_children())
        .map(|(_, option)| option.value.clone())
        .collect()
}

/// Find the first option with the given value (pre-order)
pub fn find<'a>(forest: &'a [PickOption], value: &str) -> Option<&'a PickOption> {
    walk(forest)
        .map(|(_, option)| option)
        .find(|option| option.value == value)
}

/// Values that occur more than once in the forest, in first-repeat order
pub fn duplicate_values(forest: &[PickOption]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for (_, option) in walk(forest) {
        if !seen.insert(option.value.as_str()) && !duplicates.contains(&option.value) {
            duplicates.push(option.value.clone());
        }
    }
    duplicates
}
