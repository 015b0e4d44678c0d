use proptest::prelude::*;

use picklist::picker::PickOption;
use picklist::{Key, Picker};

/// Shape of a generated node before values are assigned
#[derive(Debug, Clone)]
pub struct Shape {
    pub label: String,
    pub disabled: bool,
    pub children: Vec<Shape>,
}

fn label() -> impl Strategy<Value = String> {
    // Small alphabet so that searches hit often.
    proptest::string::string_regex("[a-dA-D]{1,3}").unwrap()
}

pub fn shape() -> impl Strategy<Value = Shape> {
    let leaf = (label(), proptest::bool::weighted(0.15)).prop_map(|(label, disabled)| Shape {
        label,
        disabled,
        children: Vec::new(),
    });
    leaf.prop_recursive(3, 24, 4, |inner| {
        (label(), proptest::collection::vec(inner, 1..4)).prop_map(|(label, children)| Shape {
            label,
            disabled: false,
            children,
        })
    })
}

/// Forest with unique values `v0, v1, ...` assigned in pre-order
pub fn forest() -> impl Strategy<Value = Vec<PickOption>> {
    proptest::collection::vec(shape(), 0..6).prop_map(|shapes| {
        let mut next = 0;
        shapes.iter().map(|shape| build(shape, &mut next)).collect()
    })
}

fn build(shape: &Shape, next: &mut usize) -> PickOption {
    let mut option = PickOption::new(format!("v{}", next), shape.label.clone());
    *next += 1;
    if shape.disabled {
        option = option.disabled();
    }
    let children: Vec<PickOption> = shape.children.iter().map(|c| build(c, next)).collect();
    option.with_children(children)
}

pub fn query() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-dA-D]{0,2}").unwrap()
}

/// One user interaction
#[derive(Debug, Clone)]
pub enum Action {
    Key(Key),
    Search(String),
    /// Select the n-th visible entry, if any
    SelectVisible(usize),
    /// Remove the n-th selected option, if any
    RemoveSelected(usize),
    Highlight(usize),
    /// Toggle expansion of the n-th visible entry, if any
    ToggleVisible(usize),
    ClearAll,
    Open,
    Close,
}

pub fn key() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::ArrowDown),
        Just(Key::ArrowUp),
        Just(Key::ArrowLeft),
        Just(Key::ArrowRight),
        Just(Key::Enter),
        Just(Key::Escape),
        Just(Key::Backspace),
        Just(Key::Tab),
    ]
}

pub fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => key().prop_map(Action::Key),
        2 => query().prop_map(Action::Search),
        3 => (0usize..8).prop_map(Action::SelectVisible),
        1 => (0usize..4).prop_map(Action::RemoveSelected),
        1 => (0usize..10).prop_map(Action::Highlight),
        1 => (0usize..8).prop_map(Action::ToggleVisible),
        1 => Just(Action::ClearAll),
        1 => Just(Action::Open),
        1 => Just(Action::Close),
    ]
}

pub fn apply(picker: &mut Picker, action: &Action) {
    match action {
        Action::Key(key) => {
            picker.handle_key(*key);
        }
        Action::Search(query) => picker.set_search(query.clone()),
        Action::SelectVisible(n) => {
            let option = picker.visible().get(*n).map(|e| e.option.clone());
            if let Some(option) = option {
                picker.select_option(&option);
            }
        }
        Action::RemoveSelected(n) => {
            if let Some(option) = picker.selected().get(*n).cloned() {
                picker.remove_option(&option);
            }
        }
        Action::Highlight(n) => picker.highlight_option(*n),
        Action::ToggleVisible(n) => {
            let value = picker.visible().get(*n).map(|e| e.option.value.clone());
            if let Some(value) = value {
                picker.toggle_expand(&value);
            }
        }
        Action::ClearAll => picker.clear_all(),
        Action::Open => picker.open(),
        Action::Close => picker.close(),
    }
}
