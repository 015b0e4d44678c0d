//! Picklist - searchable multi-value picker
//!
//! Picklist models a multi-select dropdown over flat, grouped or tree-shaped
//! options as a pure state machine plus a controller that enforces policy
//! (selection caps, disabled options, controlled values). A small terminal
//! front end in [`ui`] drives it interactively.

pub mod config;
pub mod error;
pub mod picker;
pub mod ui;

// Re-exports for convenience
pub use config::{ConfigWarning, Messages, PickerConfig, PickerFile};
pub use error::{PicklistError, PicklistResult};
pub use picker::{
    Callbacks, Effect, Key, KeyOutcome, PickOption, Picker, PickerBuilder, PickerEvent,
    PickerListener, PickerState, PickerView, PointerTarget,
};
