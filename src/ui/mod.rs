//! Terminal front end for the picker.
//!
//! - `render`: pure string rendering of a [`crate::picker::PickerView`]
//! - `input`: key mapping and the raw-mode loop
//! - `output`: warnings and final selection for non-interactive output
//! - `terminal`/`theme`: capability detection and design tokens

pub mod input;
pub mod output;
pub mod render;
pub mod terminal;
pub mod theme;
