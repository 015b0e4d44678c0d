//! Property tests for the pure selection reducer.

use proptest::prelude::*;

use picklist::picker::PickOption;
use picklist::{PickerEvent, PickerState};

fn option() -> impl Strategy<Value = PickOption> {
    (0u8..6).prop_map(|n| PickOption::new(format!("o{n}"), format!("Option {n}")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: selecting an already selected option changes nothing.
    #[test]
    fn property_select_is_idempotent(options in proptest::collection::vec(option(), 1..8)) {
        let mut state = PickerState::default();
        for option in &options {
            state = state.reduce(PickerEvent::SelectOption(option.clone()));
        }
        for option in &options {
            let again = state.reduce(PickerEvent::SelectOption(option.clone()));
            prop_assert_eq!(&again, &state);
        }
    }

    /// PROPERTY: selection keeps first-selection order without duplicates.
    #[test]
    fn property_select_preserves_order(options in proptest::collection::vec(option(), 0..12)) {
        let mut state = PickerState::default();
        let mut expected: Vec<String> = Vec::new();
        for option in &options {
            state = state.reduce(PickerEvent::SelectOption(option.clone()));
            if !expected.contains(&option.value) {
                expected.push(option.value.clone());
            }
        }
        let actual: Vec<String> = state.selected.iter().map(|o| o.value.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: removing an option removes exactly that value.
    #[test]
    fn property_remove_drops_only_that_value(
        options in proptest::collection::vec(option(), 0..8),
        target in option()
    ) {
        let state = PickerState::default()
            .reduce(PickerEvent::SetSelectedExternally(options));
        let next = state.reduce(PickerEvent::RemoveOption(target.clone()));

        prop_assert!(!next.is_selected(&target.value));
        let kept: Vec<&PickOption> = state
            .selected
            .iter()
            .filter(|o| o.value != target.value)
            .collect();
        prop_assert_eq!(next.selected.iter().collect::<Vec<_>>(), kept);
    }

    /// PROPERTY: toggling expansion twice is the identity.
    #[test]
    fn property_toggle_expand_involution(key in "[a-z]{1,4}", open in any::<bool>()) {
        let mut state = PickerState::default();
        if open {
            state = state.reduce(PickerEvent::Open);
        }
        let twice = state
            .reduce(PickerEvent::ToggleExpand(key.clone()))
            .reduce(PickerEvent::ToggleExpand(key));
        prop_assert_eq!(twice, state);
    }
}
