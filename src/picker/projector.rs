//! Visibility projection.
//!
//! Derives the flattened list of entries the dropdown should currently show
//! from the option forest and the controller state. Everything here is pure.

use std::collections::{BTreeSet, HashSet};

use indexmap::IndexMap;

use super::option::{PickOption, SearchQuery};

/// Bucket used for options without a group when grouping is enabled
pub const FALLBACK_GROUP: &str = "Other";

/// A flattened representation of an option for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleEntry<'a> {
    pub option: &'a PickOption,
    /// Nesting level (0 = top level)
    pub depth: usize,
    /// Whether the option has at least one child (always false in flat mode)
    pub has_children: bool,
}

/// An entry inside a group, remembering its position in the flat list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupedEntry<'a> {
    /// Index into the flattened visible list
    pub index: usize,
    pub option: &'a PickOption,
}

/// Group label to entries, in first-seen group order
pub type GroupedOptions<'a> = IndexMap<String, Vec<GroupedEntry<'a>>>;

/// Inputs to a projection.
///
/// Entries borrow from `forest` only, so the other inputs may be short-lived.
#[derive(Debug, Clone, Copy)]
pub struct Projection<'a, 's> {
    pub forest: &'a [PickOption],
    pub expanded: &'s BTreeSet<String>,
    /// Values of the currently selected options
    pub selected: &'s HashSet<&'s str>,
    pub query: &'s str,
    pub nested: bool,
}

impl<'a> Projection<'a, '_> {
    /// Produce the ordered visible list for the configured mode
    pub fn visible(&self) -> Vec<VisibleEntry<'a>> {
        let query = SearchQuery::new(self.query);
        if self.nested {
            let mut out = Vec::new();
            self.project_level(self.forest, 0, &query, &mut out);
            out
        } else {
            self.forest
                .iter()
                .filter(|option| query.matches(option) && !self.is_selected(option))
                .map(|option| VisibleEntry {
                    option,
                    depth: 0,
                    has_children: false,
                })
                .collect()
        }
    }

    fn is_selected(&self, option: &PickOption) -> bool {
        self.selected.contains(option.value.as_str())
    }

    fn project_level(
        &self,
        level: &'a [PickOption],
        depth: usize,
        query: &SearchQuery,
        out: &mut Vec<VisibleEntry<'a>>,
    ) {
        for option in level {
            let has_children = option.has_children();
            let self_matches = query.matches(option);
            // Recomputed per node; the whole subtree is scanned again for
            // every ancestor on the path.
            let descendant_matches = has_children && query.subtree_matches(option);

            if !(self_matches || descendant_matches) || self.is_selected(option) {
                continue;
            }

            out.push(VisibleEntry {
                option,
                depth,
                has_children,
            });

            if has_children && (self.expanded.contains(&option.value) || !query.is_empty()) {
                self.project_level(&option.children, depth + 1, query, out);
            }
        }
    }
}

/// Reorder a flat visible list so that each group's entries are contiguous.
///
/// Groups appear in first-seen order and entries keep their relative order,
/// so the result lines up with [`group_entries`] row for row.
pub fn in_group_order<'a>(entries: Vec<VisibleEntry<'a>>) -> Vec<VisibleEntry<'a>> {
    let mut groups: IndexMap<&'a str, Vec<VisibleEntry<'a>>> = IndexMap::new();
    for entry in entries {
        let label = entry.option.group.as_deref().unwrap_or(FALLBACK_GROUP);
        groups.entry(label).or_default().push(entry);
    }
    groups.into_values().flatten().collect()
}

/// Partition a flat visible list by group label.
///
/// Relative order inside each group and first-seen group order are kept.
pub fn group_entries<'a>(entries: &[VisibleEntry<'a>]) -> GroupedOptions<'a> {
    let mut groups: GroupedOptions<'a> = IndexMap::new();
    for (index, entry) in entries.iter().enumerate() {
        let label = entry
            .option
            .group
            .clone()
            .unwrap_or_else(|| FALLBACK_GROUP.to_string());
        groups.entry(label).or_default().push(GroupedEntry {
            index,
            option: entry.option,
        });
    }
    groups
}
