//! Property tests for controller invariants under arbitrary interaction.

use std::collections::HashSet;

use proptest::prelude::*;

use picklist::picker::option::find;
use picklist::{Picker, PickerConfig};

use crate::common::*;

fn config() -> impl Strategy<Value = PickerConfig> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(1usize..4),
        any::<bool>(),
    )
        .prop_map(
            |(nested, group_by, close_on_select, max_selected, searchable)| PickerConfig {
                nested,
                group_by,
                close_on_select,
                max_selected,
                searchable,
                ..PickerConfig::default()
            },
        )
}

fn assert_invariants(picker: &Picker) -> Result<(), TestCaseError> {
    let state = picker.state();
    let visible = picker.visible();

    if let Some(index) = state.highlighted {
        prop_assert!(index < visible.len(), "highlight {index} out of range");
    }

    if !state.is_open {
        prop_assert!(state.search_query.is_empty());
        prop_assert_eq!(state.highlighted, None);
    }

    let values: HashSet<&str> = state.selected.iter().map(|o| o.value.as_str()).collect();
    prop_assert_eq!(values.len(), state.selected.len(), "duplicate selection");

    for entry in &visible {
        prop_assert!(
            !values.contains(entry.option.value.as_str()),
            "{} is both selected and visible",
            entry.option.value
        );
    }

    if let Some(max) = picker.config().max_selected {
        prop_assert!(state.selected.len() <= max);
    }

    for option in &state.selected {
        prop_assert!(!option.disabled);
        if picker.config().nested {
            prop_assert!(!option.has_children(), "branch {} was selected", option.value);
        }
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: invariants hold after every step of any interaction.
    #[test]
    fn property_invariants_hold_after_every_action(
        forest in forest(),
        config in config(),
        actions in proptest::collection::vec(action(), 0..40)
    ) {
        let mut picker = Picker::builder(forest).config(config).build();
        assert_invariants(&picker)?;
        for action in &actions {
            apply(&mut picker, action);
            assert_invariants(&picker)?;
        }
    }

    /// PROPERTY: every selected option exists in the forest.
    #[test]
    fn property_selection_comes_from_forest(
        forest in forest(),
        actions in proptest::collection::vec(action(), 0..40)
    ) {
        let mut picker = Picker::new(forest.clone());
        for action in &actions {
            apply(&mut picker, action);
        }
        for option in picker.selected() {
            prop_assert!(find(&forest, &option.value).is_some());
        }
    }

    /// PROPERTY: closing always resets search and highlight but keeps
    /// selection and expansion.
    #[test]
    fn property_close_resets_transient_state(
        forest in forest(),
        actions in proptest::collection::vec(action(), 0..20)
    ) {
        let config = PickerConfig { nested: true, ..PickerConfig::default() };
        let mut picker = Picker::builder(forest).config(config).build();
        for action in &actions {
            apply(&mut picker, action);
        }

        let selected = picker.selected().to_vec();
        let expanded = picker.state().expanded.clone();
        picker.close();

        prop_assert!(!picker.state().is_open);
        prop_assert!(picker.state().search_query.is_empty());
        prop_assert_eq!(picker.state().highlighted, None);
        prop_assert_eq!(picker.selected(), selected.as_slice());
        prop_assert_eq!(&picker.state().expanded, &expanded);
        prop_assert!(picker.pending_effects().is_empty());
    }

    /// PROPERTY: ArrowDown never moves past the last visible entry.
    #[test]
    fn property_arrow_down_saturates(forest in forest(), presses in 1usize..30) {
        let mut picker = Picker::new(forest);
        picker.open();
        for _ in 0..presses {
            picker.handle_key(picklist::Key::ArrowDown);
        }
        let len = picker.visible().len();
        let expected = len.checked_sub(1).map(|last| presses.min(last));
        prop_assert_eq!(picker.state().highlighted, expected);
    }
}
