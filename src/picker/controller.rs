//! Picker controller: policy-aware dispatch on top of the state machine.
//!
//! The controller owns the option forest, the configuration and the
//! [`PickerState`]. Every action funnels through [`Picker::dispatch`], which
//! runs the reducer and then re-establishes the highlight invariant against
//! the freshly projected visible list.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

use crate::config::PickerConfig;

use super::listener::{NoopListener, PickerListener};
use super::option::{branch_keys, duplicate_values, PickOption};
use super::projector::{group_entries, in_group_order, GroupedOptions, Projection, VisibleEntry};
use super::state::{PickerEvent, PickerState};

/// Deferred presentation work, executed after the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Move keyboard focus into the search field
    FocusSearch,
    /// Scroll the entry at this visible index into view
    ScrollIntoView(usize),
}

/// Keys understood by [`Picker::handle_key`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    ArrowRight,
    ArrowLeft,
    Enter,
    Escape,
    Backspace,
    Tab,
}

/// What the host should do with the original key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// Suppress the host's default handling (caret movement, form submit...)
    pub prevent_default: bool,
}

impl KeyOutcome {
    const PASS: Self = Self {
        prevent_default: false,
    };
    const CONSUMED: Self = Self {
        prevent_default: true,
    };
}

/// Where a pointer-down landed relative to the picker's root container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Inside,
    Outside,
}

/// Builder for [`Picker`]
pub struct PickerBuilder {
    options: Vec<PickOption>,
    config: PickerConfig,
    value: Option<Vec<PickOption>>,
    default_value: Vec<PickOption>,
    listener: Box<dyn PickerListener>,
}

impl PickerBuilder {
    pub fn config(mut self, config: PickerConfig) -> Self {
        self.config = config;
        self
    }

    /// Run in controlled mode with `value` as the authoritative selection
    pub fn value(mut self, value: Vec<PickOption>) -> Self {
        self.value = Some(value);
        self
    }

    /// Initial selection for uncontrolled mode
    pub fn default_value(mut self, value: Vec<PickOption>) -> Self {
        self.default_value = value;
        self
    }

    pub fn listener(mut self, listener: impl PickerListener + 'static) -> Self {
        self.listener = Box::new(listener);
        self
    }

    pub fn build(self) -> Picker {
        let duplicates = duplicate_values(&self.options);
        if !duplicates.is_empty() {
            log::warn!(
                "duplicate option values {:?}; first occurrence wins",
                duplicates
            );
        }

        let expanded: BTreeSet<String> = if self.config.expand_all_by_default {
            branch_keys(&self.options).into_iter().collect()
        } else {
            self.config.default_expanded_keys.iter().cloned().collect()
        };

        let controlled = self.value.is_some();
        let selected = self.value.unwrap_or(self.default_value);

        Picker {
            options: self.options.into(),
            config: self.config,
            controlled,
            state: PickerState::new(selected, expanded),
            effects: Vec::new(),
            listener: self.listener,
        }
    }
}

impl fmt::Debug for PickerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerBuilder")
            .field("options", &self.options.len())
            .field("config", &self.config)
            .field("controlled", &self.value.is_some())
            .finish_non_exhaustive()
    }
}

/// Interactive multi-select controller
pub struct Picker {
    options: Arc<[PickOption]>,
    config: PickerConfig,
    controlled: bool,
    state: PickerState,
    effects: Vec<Effect>,
    listener: Box<dyn PickerListener>,
}

impl fmt::Debug for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picker")
            .field("options", &self.options.len())
            .field("config", &self.config)
            .field("controlled", &self.controlled)
            .field("state", &self.state)
            .field("effects", &self.effects)
            .finish_non_exhaustive()
    }
}

impl Picker {
    /// Start building a picker over `options`
    pub fn builder(options: Vec<PickOption>) -> PickerBuilder {
        PickerBuilder {
            options,
            config: PickerConfig::default(),
            value: None,
            default_value: Vec::new(),
            listener: Box::new(NoopListener),
        }
    }

    /// Picker with default settings and no listener
    pub fn new(options: Vec<PickOption>) -> Self {
        Self::builder(options).build()
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn options(&self) -> &[PickOption] {
        &self.options
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    pub fn selected(&self) -> &[PickOption] {
        &self.state.selected
    }

    /// The flattened list of entries currently eligible for display.
    ///
    /// With grouping active the list is in group order, matching the rows a
    /// grouped dropdown draws.
    pub fn visible(&self) -> Vec<VisibleEntry<'_>> {
        let selected: HashSet<&str> = self
            .state
            .selected
            .iter()
            .map(|option| option.value.as_str())
            .collect();
        let visible = Projection {
            forest: &self.options,
            expanded: &self.state.expanded,
            selected: &selected,
            query: &self.state.search_query,
            nested: self.config.nested,
        }
        .visible();

        if self.config.grouping_active() {
            in_group_order(visible)
        } else {
            visible
        }
    }

    /// Visible entries partitioned by group, when grouping applies
    pub fn grouped(&self) -> Option<GroupedOptions<'_>> {
        self.config
            .grouping_active()
            .then(|| group_entries(&self.visible()))
    }

    /// The entry under the highlight, if any
    pub fn highlighted_entry(&self) -> Option<VisibleEntry<'_>> {
        let index = self.state.highlighted?;
        self.visible().get(index).copied()
    }

    pub fn can_select_more(&self) -> bool {
        self.config
            .max_selected
            .map_or(true, |max| self.state.selected.len() < max)
    }

    /// Pending effects, oldest first
    pub fn pending_effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Drain pending effects for the presentation layer to execute
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    pub fn open(&mut self) {
        if self.config.disabled {
            log::debug!("open ignored: picker is disabled");
            return;
        }
        self.dispatch(PickerEvent::Open);
        self.listener.on_open();
        if self.config.searchable {
            self.queue(Effect::FocusSearch);
        }
    }

    /// Close the dropdown. Honored even while disabled.
    pub fn close(&mut self) {
        self.dispatch(PickerEvent::Close);
        // Closing supersedes focus/scroll work scheduled by an earlier open.
        self.effects.clear();
        self.listener.on_close();
    }

    pub fn toggle(&mut self) {
        if self.state.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Replace the search text. Typing into a closed picker opens it first.
    pub fn set_search(&mut self, query: impl Into<String>) {
        if self.config.disabled {
            return;
        }
        if !self.state.is_open {
            self.open();
        }
        let query = query.into();
        self.dispatch(PickerEvent::SetSearch(query.clone()));
        self.listener.on_search(&query);
    }

    /// Select an option, or toggle its expansion when it is a tree branch
    pub fn select_option(&mut self, option: &PickOption) {
        if self.config.disabled {
            return;
        }
        if !self.can_select_more() {
            log::debug!("select '{}' ignored: selection cap reached", option.value);
            return;
        }
        if option.disabled {
            log::debug!("select '{}' ignored: option disabled", option.value);
            return;
        }
        if self.config.nested && option.has_children() {
            self.dispatch(PickerEvent::ToggleExpand(option.value.clone()));
            return;
        }

        self.dispatch(PickerEvent::SelectOption(option.clone()));
        self.listener.on_change(&self.state.selected);

        if self.config.close_on_select {
            self.close();
        } else if self.config.searchable {
            self.queue(Effect::FocusSearch);
        }
    }

    pub fn remove_option(&mut self, option: &PickOption) {
        if self.config.disabled {
            return;
        }
        self.dispatch(PickerEvent::RemoveOption(option.clone()));
        self.listener.on_change(&self.state.selected);
    }

    pub fn clear_all(&mut self) {
        if self.config.disabled {
            return;
        }
        self.dispatch(PickerEvent::ClearAll);
        self.listener.on_change(&self.state.selected);
    }

    /// Move the highlight (e.g. on hover); out-of-range indices are clamped.
    /// A closed picker has nothing to highlight.
    pub fn highlight_option(&mut self, index: usize) {
        if self.config.disabled || !self.state.is_open {
            return;
        }
        self.dispatch(PickerEvent::SetHighlighted(Some(index)));
    }

    /// Expand or collapse a tree node. Not reported to the listener.
    pub fn toggle_expand(&mut self, key: &str) {
        if self.config.disabled {
            return;
        }
        self.dispatch(PickerEvent::ToggleExpand(key.to_string()));
    }

    /// Replace the whole expansion set (e.g. expand all / collapse all)
    pub fn set_expanded_keys(&mut self, keys: impl IntoIterator<Item = String>) {
        if self.config.disabled {
            return;
        }
        self.dispatch(PickerEvent::SetExpandedKeys(keys.into_iter().collect()));
    }

    /// Controlled mode: reconcile the caller's authoritative selection
    pub fn set_value(&mut self, value: Vec<PickOption>) {
        if !self.controlled {
            log::debug!("set_value ignored: picker is uncontrolled");
            return;
        }
        self.dispatch(PickerEvent::SetSelectedExternally(value));
    }

    /// Replace the option forest, e.g. once an async load finishes
    pub fn set_options(&mut self, options: Vec<PickOption>) {
        self.options = options.into();
        self.clamp_highlight();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.config.loading = loading;
    }

    /// Disabling an open picker closes it
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled && self.state.is_open {
            self.close();
        }
    }

    /// Pointer-down anywhere; outside the root container closes the picker
    pub fn handle_pointer_down(&mut self, target: PointerTarget) {
        if target == PointerTarget::Outside && self.state.is_open {
            self.close();
        }
    }

    /// Keyboard protocol for the focused control
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if self.config.disabled {
            return KeyOutcome::PASS;
        }

        match key {
            Key::ArrowDown => {
                if !self.state.is_open {
                    self.open();
                } else {
                    let next = self.state.highlighted.map_or(0, |i| i + 1);
                    let last = self.visible().len().checked_sub(1);
                    let target = last.map(|last| next.min(last));
                    self.dispatch(PickerEvent::SetHighlighted(target));
                }
                KeyOutcome::CONSUMED
            }
            Key::ArrowUp => {
                if self.state.is_open {
                    let prev = self.state.highlighted.map_or(0, |i| i.saturating_sub(1));
                    self.dispatch(PickerEvent::SetHighlighted(Some(prev)));
                }
                KeyOutcome::CONSUMED
            }
            Key::ArrowRight => {
                if let Some(value) = self.highlighted_branch(false) {
                    self.dispatch(PickerEvent::ToggleExpand(value));
                }
                KeyOutcome::PASS
            }
            Key::ArrowLeft => {
                if let Some(value) = self.highlighted_branch(true) {
                    self.dispatch(PickerEvent::ToggleExpand(value));
                }
                KeyOutcome::PASS
            }
            Key::Enter => {
                if self.state.is_open {
                    let option = self.highlighted_entry().map(|entry| entry.option.clone());
                    if let Some(option) = option {
                        self.select_option(&option);
                    }
                } else {
                    self.open();
                }
                KeyOutcome::CONSUMED
            }
            Key::Escape => {
                self.close();
                KeyOutcome::CONSUMED
            }
            Key::Backspace => {
                if self.config.searchable && self.state.search_query.is_empty() {
                    if let Some(last) = self.state.selected.last().cloned() {
                        self.remove_option(&last);
                    }
                }
                KeyOutcome::PASS
            }
            Key::Tab => {
                if self.state.is_open {
                    self.close();
                }
                KeyOutcome::PASS
            }
        }
    }

    /// Value of the highlighted entry when it is a branch whose expansion
    /// state equals `expanded` (nested mode, open dropdown only)
    fn highlighted_branch(&self, expanded: bool) -> Option<String> {
        if !self.state.is_open || !self.config.nested {
            return None;
        }
        let entry = self.highlighted_entry()?;
        (entry.has_children && self.state.is_expanded(&entry.option.value) == expanded)
            .then(|| entry.option.value.clone())
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    fn dispatch(&mut self, event: PickerEvent) {
        log::trace!("dispatch {:?}", event);
        let before = self.state.highlighted;
        self.state = self.state.reduce(event);
        self.clamp_highlight();

        if self.state.is_open && self.state.highlighted != before {
            if let Some(index) = self.state.highlighted {
                self.queue(Effect::ScrollIntoView(index));
            }
        }
    }

    /// Keep `highlighted` pointing into the current visible list
    fn clamp_highlight(&mut self) {
        let Some(index) = self.state.highlighted else {
            return;
        };
        let len = self.visible().len();
        self.state.highlighted = if len == 0 {
            None
        } else {
            Some(index.min(len - 1))
        };
    }

    fn queue(&mut self, effect: Effect) {
        // Only the latest scroll target matters.
        self.effects.retain(|pending| {
            *pending != effect && !matches!(
                (pending, effect),
                (Effect::ScrollIntoView(_), Effect::ScrollIntoView(_))
            )
        });
        self.effects.push(effect);
    }
}
