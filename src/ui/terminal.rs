use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub width: u16,
    pub height: u16,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal(),
        crossterm::terminal::size().ok(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    size: Option<(u16, u16)>,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();

    let supports_color = is_tty && !term_is_dumb && !no_color;
    let supports_unicode = !term_is_dumb && unicode_locale(&get_env);

    let (width, height) = size.unwrap_or((80, 24));
    TerminalCapabilities {
        is_tty,
        supports_color,
        supports_unicode,
        width,
        height,
    }
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v == "c" || v == "posix" {
                return false;
            }
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
        }
    }

    // Default to true on modern systems unless explicitly "dumb".
    true
}
