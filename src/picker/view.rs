//! View-model handed to the presentation layer.

use super::controller::Picker;
use super::projector::{GroupedOptions, VisibleEntry};
use super::state::PickerState;

/// What the dropdown area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownBody<'a> {
    Closed,
    /// Selection cap reached; shown instead of the option list
    MaxReached(&'a str),
    Loading(&'a str),
    /// Nothing matches the current search
    Empty(&'a str),
    /// Render `visible` as a (possibly indented) list
    Options,
    /// Render `groups`
    Groups,
}

/// Accessibility contract for listbox/combobox markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accessibility<'a> {
    pub expanded: bool,
    pub multiselectable: bool,
    /// Value of the highlighted option, for `aria-activedescendant`
    pub active_descendant: Option<&'a str>,
}

/// Snapshot of everything needed to draw a picker
#[derive(Debug, Clone)]
pub struct PickerView<'a> {
    pub state: &'a PickerState,
    pub visible: Vec<VisibleEntry<'a>>,
    pub groups: Option<GroupedOptions<'a>>,
    pub can_select_more: bool,
    pub body: DropdownBody<'a>,
    /// Search box placeholder
    pub placeholder: &'a str,
    /// Whether the clear-all control is offered
    pub show_clear: bool,
    pub disabled: bool,
    /// Tree mode: entries carry depth and expand/collapse affordances
    pub nested: bool,
    pub searchable: bool,
    pub accessibility: Accessibility<'a>,
}

impl<'a> PickerView<'a> {
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.state.highlighted == Some(index)
    }

    pub fn is_expanded(&self, value: &str) -> bool {
        self.state.is_expanded(value)
    }

    pub fn highlighted_entry(&self) -> Option<&VisibleEntry<'a>> {
        self.visible.get(self.state.highlighted?)
    }
}

impl Picker {
    /// Build the view-model for the current state
    pub fn view(&self) -> PickerView<'_> {
        let state = self.state();
        let config = self.config();
        let messages = &config.messages;

        let visible = self.visible();
        let groups = self.grouped();
        let can_select_more = self.can_select_more();

        let body = if !state.is_open {
            DropdownBody::Closed
        } else if !can_select_more {
            DropdownBody::MaxReached(&messages.max_reached)
        } else if config.loading {
            DropdownBody::Loading(&messages.loading)
        } else if visible.is_empty() {
            DropdownBody::Empty(&messages.no_options)
        } else if groups.is_some() {
            DropdownBody::Groups
        } else {
            DropdownBody::Options
        };

        let has_selection = !state.selected.is_empty();
        let placeholder = if has_selection {
            &messages.search_placeholder
        } else {
            &messages.placeholder
        };

        let active_descendant = state
            .highlighted
            .and_then(|index| visible.get(index).copied())
            .map(|entry| entry.option.value.as_str());

        PickerView {
            state,
            groups,
            can_select_more,
            body,
            placeholder,
            show_clear: config.clearable && has_selection && !config.disabled,
            disabled: config.disabled,
            nested: config.nested,
            searchable: config.searchable,
            accessibility: Accessibility {
                expanded: state.is_open,
                multiselectable: true,
                active_descendant: if state.is_open { active_descendant } else { None },
            },
            visible,
        }
    }
}
