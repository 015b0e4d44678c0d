//! Scenario: Picking Tags From a Flat List
//!
//! Journey: A user types to narrow a list, picks a few entries with the
//! keyboard, removes one with Backspace and finishes.

use std::cell::RefCell;
use std::rc::Rc;

use picklist::ui::render::render_dropdown;
use picklist::ui::theme::Icons;
use picklist::picker::DropdownBody;
use picklist::{Callbacks, Effect, Key, Picker, PickerConfig};

use crate::common::*;

/// SCENARIO: search, select with Enter, remove with Backspace
#[test]
fn scenario_search_select_and_remove() {
    let changes: Rc<RefCell<Vec<Vec<String>>>> = Rc::default();
    let searches: Rc<RefCell<Vec<String>>> = Rc::default();
    let listener = {
        let changes = Rc::clone(&changes);
        let searches = Rc::clone(&searches);
        Callbacks::default()
            .with_on_change(move |selected| {
                changes
                    .borrow_mut()
                    .push(selected.iter().map(|o| o.value.clone()).collect());
            })
            .with_on_search(move |query| searches.borrow_mut().push(query.to_string()))
    };
    let mut picker = Picker::builder(languages()).listener(listener).build();

    // Step 1: typing opens the dropdown and filters it.
    picker.set_search("r");
    assert!(picker.state().is_open);
    assert_eq!(visible_values(&picker), vec!["rust", "ruby"]);

    // Step 2: Enter picks the highlighted entry and clears the search.
    picker.handle_key(Key::Enter);
    assert_eq!(selected_values(&picker), vec!["rust"]);
    assert!(picker.state().search_query.is_empty());
    assert!(!visible_values(&picker).contains(&"rust".to_string()));

    // Step 3: arrow down to Go and pick it.
    picker.handle_key(Key::ArrowDown);
    assert_eq!(
        picker.highlighted_entry().map(|e| e.option.value.clone()),
        Some("go".to_string())
    );
    picker.handle_key(Key::Enter);
    assert_eq!(selected_values(&picker), vec!["rust", "go"]);

    // Step 4: Backspace on an empty search removes the last tag.
    picker.handle_key(Key::Backspace);
    assert_eq!(selected_values(&picker), vec!["rust"]);

    // Step 5: Escape finishes.
    picker.handle_key(Key::Escape);
    assert!(!picker.state().is_open);

    assert_eq!(
        *changes.borrow(),
        vec![
            vec!["rust".to_string()],
            vec!["rust".to_string(), "go".to_string()],
            vec!["rust".to_string()],
        ]
    );
    assert_eq!(*searches.borrow(), vec!["r".to_string()]);
}

/// SCENARIO: a capped picker shows the cap message and refuses more
#[test]
fn scenario_selection_cap() {
    let config = PickerConfig {
        max_selected: Some(2),
        ..PickerConfig::default()
    };
    let mut picker = Picker::builder(languages()).config(config).build();
    picker.open();
    picker.handle_key(Key::Enter);
    picker.handle_key(Key::Enter);
    assert_eq!(selected_values(&picker), vec!["rust", "python"]);
    assert_eq!(
        picker.view().body,
        DropdownBody::MaxReached("Maximum selections reached")
    );

    picker.handle_key(Key::Enter);
    assert_eq!(picker.selected().len(), 2);

    // Removing one lifts the cap again.
    picker.handle_key(Key::Backspace);
    assert!(picker.can_select_more());
    assert_eq!(picker.view().body, DropdownBody::Options);
}

/// SCENARIO: grouped dropdown, effects drive focus and scrolling
#[test]
fn scenario_grouped_list_with_effects() {
    let config = PickerConfig {
        group_by: true,
        ..PickerConfig::default()
    };
    let mut picker = Picker::builder(languages()).config(config).build();

    picker.open();
    assert!(picker.take_effects().contains(&Effect::FocusSearch));

    let groups = picker.grouped().unwrap();
    let labels: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["Systems", "Scripting", "Other"]);
    assert_eq!(groups["Other"].len(), 2);

    // Visible order follows the groups, so each ArrowDown moves one row down.
    let mut highlighted_rows = Vec::new();
    for step in 1..=3 {
        picker.handle_key(Key::ArrowDown);
        assert_eq!(picker.take_effects(), vec![Effect::ScrollIntoView(step)]);

        let lines = render_dropdown(&picker.view(), &Icons::new(false));
        let row = lines
            .iter()
            .position(|l| l.text.starts_with('>'))
            .expect("one highlighted line");
        assert_eq!(lines[row].entry, Some(step));
        highlighted_rows.push((row, lines[row].text.clone()));
    }
    assert_eq!(
        highlighted_rows,
        vec![
            (2, ">   Go".to_string()),
            (4, ">   Python".to_string()),
            (5, ">   Ruby".to_string()),
        ]
    );
}

/// SCENARIO: the disabled entry can be highlighted but never picked
#[test]
fn scenario_disabled_entry_is_skipped() {
    let mut picker = Picker::new(languages());
    picker.set_search("cob");
    assert_eq!(visible_values(&picker), vec!["cobol"]);
    picker.handle_key(Key::Enter);
    assert!(picker.selected().is_empty());
    assert!(picker.state().is_open);
}
