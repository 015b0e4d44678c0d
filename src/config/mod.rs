//! Picker configuration
//!
//! Settings come from code (`PickerConfig::default()` plus field updates)
//! or from a TOML picker file holding settings, options and the initial
//! selection together.

mod loader;
mod types;

pub use loader::{grouping_conflict, parse_with_warnings, ConfigWarning, WarningKind};
pub use types::{Messages, PickerConfig, PickerFile};
