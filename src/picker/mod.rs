//! Picklist controller
//!
//! A headless, multi-value picklist over flat, grouped or tree-shaped
//! options. The presentation layer reads a [`PickerView`] and calls the
//! actions on [`Picker`]; everything else happens here.
//!
//! # Module Structure
//!
//! - `option` - option forest data and pure traversal helpers
//! - `projector` - derives the flattened visible list from state
//! - `state` - the pure reducer owning open/search/highlight/selection
//! - `controller` - policy-aware dispatch, keyboard protocol and effects
//! - `listener` - change notifications to the caller
//! - `view` - view-model for renderers

mod controller;
mod listener;
pub mod option;
pub mod projector;
mod state;
mod view;

pub use controller::{Effect, Key, KeyOutcome, Picker, PickerBuilder, PointerTarget};
pub use listener::{Callbacks, NoopListener, PickerListener};
pub use option::PickOption;
pub use projector::{GroupedEntry, GroupedOptions, VisibleEntry, FALLBACK_GROUP};
pub use state::{PickerEvent, PickerState};
pub use view::{Accessibility, DropdownBody, PickerView};
