#![no_main]

use libfuzzer_sys::fuzz_target;

use picklist::picker::PickOption;
use picklist::{Key, Picker, PickerConfig};

const KEYS: [Key; 8] = [
    Key::ArrowDown,
    Key::ArrowUp,
    Key::ArrowRight,
    Key::ArrowLeft,
    Key::Enter,
    Key::Escape,
    Key::Backspace,
    Key::Tab,
];

fn forest() -> Vec<PickOption> {
    vec![
        PickOption::new("a", "Alpha").with_children([
            PickOption::new("b", "Beta"),
            PickOption::new("c", "Gamma").with_children([PickOption::new("d", "Delta")]),
        ]),
        PickOption::new("e", "Epsilon").disabled(),
        PickOption::new("f", "Phi").in_group("Greek"),
    ]
}

fuzz_target!(|data: &[u8]| {
    let Some((&flags, bytes)) = data.split_first() else {
        return;
    };
    let config = PickerConfig {
        nested: flags & 1 != 0,
        group_by: flags & 2 != 0,
        close_on_select: flags & 4 != 0,
        max_selected: (flags & 8 != 0).then_some(2),
        ..PickerConfig::default()
    };
    let mut picker = Picker::builder(forest()).config(config).build();

    // Key presses and typed characters should never panic or break the
    // highlight bound.
    for &byte in bytes {
        if byte & 0x80 != 0 {
            let mut query = picker.state().search_query.clone();
            query.push(char::from(b'a' + (byte & 0x07)));
            picker.set_search(query);
        } else {
            picker.handle_key(KEYS[usize::from(byte) % KEYS.len()]);
        }
        if let Some(index) = picker.state().highlighted {
            assert!(index < picker.visible().len());
        }
        let _ = picker.view();
    }
});
