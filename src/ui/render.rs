//! Plain-text rendering of a picker view.
//!
//! Produces strings only; colors and cursor handling belong to the caller.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::picker::{DropdownBody, PickerView, VisibleEntry};

use super::theme::Icons;

/// One rendered dropdown line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownLine {
    pub text: String,
    /// Visible-list index when the line is an option (not a header/message)
    pub entry: Option<usize>,
    pub kind: LineKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Option { highlighted: bool, disabled: bool },
    GroupHeader,
    Message,
}

/// Render the tag bar and search text
pub fn render_field(view: &PickerView<'_>, icons: &Icons) -> String {
    let mut out = String::new();
    for option in &view.state.selected {
        out.push_str(&format!("[{} {}] ", option.label, icons.remove));
    }

    let query = &view.state.search_query;
    if view.searchable {
        let text = if query.is_empty() {
            view.placeholder
        } else {
            query.as_str()
        };
        out.push_str(&format!("{} {}", icons.search, text));
    } else if view.state.selected.is_empty() {
        out.push_str(view.placeholder);
    }

    if view.show_clear {
        out.push_str(&format!("  {}", icons.clear));
    }

    out.trim_end().to_string()
}

/// Render a single option entry
pub fn render_entry(
    entry: &VisibleEntry<'_>,
    view: &PickerView<'_>,
    indent: usize,
    is_active: bool,
    icons: &Icons,
) -> String {
    let cursor = if is_active {
        format!("{} ", icons.pointer)
    } else {
        "  ".to_string()
    };
    let indent = "  ".repeat(indent + entry.depth);

    let expander = if !view.nested {
        String::new()
    } else if entry.has_children {
        let icon = if view.is_expanded(&entry.option.value) {
            icons.expand
        } else {
            icons.collapse
        };
        format!("{} ", icon)
    } else {
        "  ".to_string()
    };

    let disabled = if entry.option.disabled {
        format!(" {}", icons.disabled)
    } else {
        String::new()
    };

    format!(
        "{}{}{}{}{}",
        cursor, indent, expander, entry.option.label, disabled
    )
}

/// Render the dropdown body into lines
pub fn render_dropdown(view: &PickerView<'_>, icons: &Icons) -> Vec<DropdownLine> {
    let message = |text: &str| {
        vec![DropdownLine {
            text: format!("  {}", text),
            entry: None,
            kind: LineKind::Message,
        }]
    };

    match view.body {
        DropdownBody::Closed => Vec::new(),
        DropdownBody::MaxReached(text) => {
            vec![DropdownLine {
                text: format!("  {} {}", icons.warning, text),
                entry: None,
                kind: LineKind::Message,
            }]
        }
        DropdownBody::Loading(text) | DropdownBody::Empty(text) => message(text),
        DropdownBody::Options => view
            .visible
            .iter()
            .enumerate()
            .map(|(index, entry)| option_line(view, entry, index, 0, icons))
            .collect(),
        DropdownBody::Groups => {
            let mut lines = Vec::new();
            if let Some(groups) = &view.groups {
                for (label, entries) in groups {
                    lines.push(DropdownLine {
                        text: format!("  {}", label),
                        entry: None,
                        kind: LineKind::GroupHeader,
                    });
                    for grouped in entries {
                        let entry = VisibleEntry {
                            option: grouped.option,
                            depth: 0,
                            has_children: false,
                        };
                        lines.push(option_line(view, &entry, grouped.index, 1, icons));
                    }
                }
            }
            lines
        }
    }
}

fn option_line(
    view: &PickerView<'_>,
    entry: &VisibleEntry<'_>,
    index: usize,
    indent: usize,
    icons: &Icons,
) -> DropdownLine {
    let highlighted = view.is_highlighted(index);
    DropdownLine {
        text: render_entry(entry, view, indent, highlighted, icons),
        entry: Some(index),
        kind: LineKind::Option {
            highlighted,
            disabled: entry.option.disabled,
        },
    }
}

/// Render the whole picker (field, separator, dropdown) to a string
pub fn render_picker(view: &PickerView<'_>, icons: &Icons, width: usize) -> String {
    let mut out = truncate_to_width(&render_field(view, icons), width, icons);
    out.push('\n');

    let lines = render_dropdown(view, icons);
    if !lines.is_empty() {
        out.push_str(&icons.horizontal.repeat(width.min(40)));
        out.push('\n');
        for line in lines {
            out.push_str(&truncate_to_width(&line.text, width, icons));
            out.push('\n');
        }
    }
    out
}

/// Render the help bar
pub fn render_help_bar(nested: bool) -> String {
    let mut help = String::from("↑/↓ move  enter select  type to search  backspace remove");
    if nested {
        help.push_str("  ←/→ collapse/expand");
    }
    help.push_str("\nesc close/finish  ctrl+u clear  ctrl+d finish  ctrl+c abort");
    help
}

/// Cut `text` to at most `width` display columns, marking the cut
pub fn truncate_to_width(text: &str, width: usize, icons: &Icons) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let budget = width.saturating_sub(icons.ellipsis.width());
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(icons.ellipsis);
    out
}
