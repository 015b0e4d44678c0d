use crossterm::style::Color;

/// Design tokens for the terminal picker.
///
/// Design constraints:
/// - Only 4 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const POINTER: &str = "❯";
    pub const SEARCH: &str = "⌕";
    pub const REMOVE: &str = "×";
    pub const CLEAR: &str = "⊗";
    pub const DISABLED: &str = "⊘";
    pub const WARNING: &str = "⚠";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const ELLIPSIS: &str = "…";
}

pub mod icons_ascii {
    pub const POINTER: &str = ">";
    pub const SEARCH: &str = "?";
    pub const REMOVE: &str = "x";
    pub const CLEAR: &str = "(x)";
    pub const DISABLED: &str = "-";
    pub const WARNING: &str = "!";

    // Tree expansion.
    pub const EXPAND: &str = "v";
    pub const COLLAPSE: &str = ">";

    pub const ELLIPSIS: &str = "~";
}

pub mod borders {
    pub const HORIZONTAL: &str = "─";
}

pub mod borders_ascii {
    pub const HORIZONTAL: &str = "-";
}

/// Icon set chosen once from terminal capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub pointer: &'static str,
    pub search: &'static str,
    pub remove: &'static str,
    pub clear: &'static str,
    pub disabled: &'static str,
    pub warning: &'static str,
    pub expand: &'static str,
    pub collapse: &'static str,
    pub ellipsis: &'static str,
    pub horizontal: &'static str,
}

impl Icons {
    pub fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                pointer: icons::POINTER,
                search: icons::SEARCH,
                remove: icons::REMOVE,
                clear: icons::CLEAR,
                disabled: icons::DISABLED,
                warning: icons::WARNING,
                expand: icons::EXPAND,
                collapse: icons::COLLAPSE,
                ellipsis: icons::ELLIPSIS,
                horizontal: borders::HORIZONTAL,
            }
        } else {
            Self {
                pointer: icons_ascii::POINTER,
                search: icons_ascii::SEARCH,
                remove: icons_ascii::REMOVE,
                clear: icons_ascii::CLEAR,
                disabled: icons_ascii::DISABLED,
                warning: icons_ascii::WARNING,
                expand: icons_ascii::EXPAND,
                collapse: icons_ascii::COLLAPSE,
                ellipsis: icons_ascii::ELLIPSIS,
                horizontal: borders_ascii::HORIZONTAL,
            }
        }
    }
}
