//! Scenario: Picker Defined in a File
//!
//! Journey: A picker file on disk provides the options, the settings and a
//! preselected value; the loaded picker behaves as configured.

use std::fs;

use tempfile::tempdir;

use picklist::config::WarningKind;
use picklist::{Key, Picker, PickerFile, PicklistError};

use crate::common::*;

/// SCENARIO: load a file and pick up where its defaults leave off
#[test]
fn scenario_load_file_and_pick() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("langs.toml");
    fs::write(&path, LANGUAGES_TOML).unwrap();

    let (file, warnings) = PickerFile::load_with_warnings(&path).unwrap();
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    assert_eq!(file.picker.max_selected, Some(3));

    let initial = file.initial_selection();
    let mut picker = Picker::builder(file.options)
        .config(file.picker)
        .default_value(initial)
        .build();
    assert_eq!(selected_values(&picker), vec!["rust"]);

    picker.open();
    let groups = picker.grouped().unwrap();
    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["Scripting", "Systems"]);

    picker.handle_key(Key::Enter);
    picker.handle_key(Key::Enter);
    assert_eq!(selected_values(&picker), vec!["rust", "python", "go"]);
    assert!(!picker.can_select_more());
}

/// SCENARIO: a typo in a setting is reported, not fatal
#[test]
fn scenario_typo_produces_warning() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("typo.toml");
    fs::write(
        &path,
        "[picker]\nnestd = true\n\n[[options]]\nvalue = \"a\"\nlabel = \"A\"\n",
    )
    .unwrap();

    let (file, warnings) = PickerFile::load_with_warnings(&path).unwrap();
    assert!(!file.picker.nested);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "nestd");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(
        warnings[0].kind,
        WarningKind::UnknownKey {
            suggestion: Some("nested".to_string())
        }
    );
}

/// SCENARIO: a default value that does not exist is rejected
#[test]
fn scenario_unknown_default_value_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(
        &path,
        "default_value = [\"zig\"]\n\n[[options]]\nvalue = \"rust\"\nlabel = \"Rust\"\n",
    )
    .unwrap();

    let err = PickerFile::load(&path).unwrap_err();
    assert!(matches!(err, PicklistError::UnknownDefaultValue { ref value, .. } if value == "zig"));
}
