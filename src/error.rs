//! Error types for picklist
//!
//! The controller itself never fails; these cover loading picker files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for picklist operations
pub type PicklistResult<T> = Result<T, PicklistError>;

/// Main error type for picklist operations
#[derive(Error, Debug)]
pub enum PicklistError {
    /// Picker file could not be parsed
    #[error("invalid picker file {file}: {message}")]
    InvalidFile { file: PathBuf, message: String },

    /// Two options share the same identity key
    #[error("duplicate option value '{value}' in {file}")]
    DuplicateValue { value: String, file: PathBuf },

    /// `default_value` names an option that isn't in the forest
    #[error("default value '{value}' in {file} does not match any option")]
    UnknownDefaultValue { value: String, file: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
