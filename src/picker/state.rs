//! Selection state machine.
//!
//! A pure reducer: every event produces a new [`PickerState`] and never
//! fails. Callbacks and effects live one layer up, in the controller.

use std::collections::BTreeSet;

use super::option::PickOption;

/// The single source of truth for a picker instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerState {
    pub is_open: bool,
    pub search_query: String,
    /// Index into the current visible list
    pub highlighted: Option<usize>,
    /// Selected options in selection order
    pub selected: Vec<PickOption>,
    /// Values of expanded tree nodes (persists across open/close)
    pub expanded: BTreeSet<String>,
}

/// Events accepted by [`PickerState::reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Open,
    Close,
    SetSearch(String),
    SetHighlighted(Option<usize>),
    SelectOption(PickOption),
    RemoveOption(PickOption),
    ClearAll,
    /// Controlled mode: the caller's value replaces the selection
    SetSelectedExternally(Vec<PickOption>),
    ToggleExpand(String),
    SetExpandedKeys(BTreeSet<String>),
}

impl PickerState {
    /// Initial state for a freshly mounted picker
    pub fn new(selected: Vec<PickOption>, expanded: BTreeSet<String>) -> Self {
        Self {
            selected: dedup_by_value(selected),
            expanded,
            ..Self::default()
        }
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|option| option.value == value)
    }

    pub fn is_expanded(&self, value: &str) -> bool {
        self.expanded.contains(value)
    }

    /// Apply an event, returning the next state
    pub fn reduce(&self, event: PickerEvent) -> PickerState {
        let mut next = self.clone();
        match event {
            PickerEvent::Open => {
                next.is_open = true;
                next.highlighted = Some(0);
            }
            PickerEvent::Close => {
                next.is_open = false;
                next.search_query.clear();
                next.highlighted = None;
            }
            PickerEvent::SetSearch(query) => {
                next.search_query = query;
                next.highlighted = Some(0);
            }
            PickerEvent::SetHighlighted(index) => {
                next.highlighted = index;
            }
            PickerEvent::SelectOption(option) => {
                if !self.is_selected(&option.value) {
                    next.selected.push(option);
                    next.search_query.clear();
                }
            }
            PickerEvent::RemoveOption(option) => {
                next.selected.retain(|selected| selected.value != option.value);
            }
            PickerEvent::ClearAll => {
                next.selected.clear();
            }
            PickerEvent::SetSelectedExternally(options) => {
                next.selected = dedup_by_value(options);
            }
            PickerEvent::ToggleExpand(key) => {
                if !next.expanded.remove(&key) {
                    next.expanded.insert(key);
                }
            }
            PickerEvent::SetExpandedKeys(keys) => {
                next.expanded = keys;
            }
        }
        next
    }
}

/// Keep the first occurrence of each value, preserving order
fn dedup_by_value(options: Vec<PickOption>) -> Vec<PickOption> {
    let mut out: Vec<PickOption> = Vec::with_capacity(options.len());
    for option in options {
        if !out.iter().any(|existing| existing.value == option.value) {
            out.push(option);
        }
    }
    out
}
