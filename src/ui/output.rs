//! Non-interactive CLI output: config warnings and the final selection.

use crate::config::{ConfigWarning, WarningKind};
use crate::picker::PickOption;

/// One human-readable message per warning
pub fn format_config_warning(w: &ConfigWarning) -> String {
    let location = match w.line {
        Some(line) => format!("{}:{}", w.file.display(), line),
        None => w.file.display().to_string(),
    };

    match &w.kind {
        WarningKind::UnknownKey { suggestion } => {
            let mut message = format!("Unknown config key '{}' in {}", w.key, location);
            if let Some(suggestion) = suggestion {
                message.push_str(&format!("\n   Did you mean '{}'?", suggestion));
            }
            message
        }
        WarningKind::Ignored { reason } => {
            format!("Ignoring '{}' in {}: {}", w.key, location, reason)
        }
    }
}

pub fn print_config_warnings(warnings: &[ConfigWarning], warning_icon: &str) {
    for w in warnings {
        eprintln!("{} {}\n", warning_icon, format_config_warning(w));
    }
}

/// Final selection as printed on stdout
pub fn format_selection(selected: &[PickOption], json: bool) -> String {
    if json {
        let values: Vec<&str> = selected.iter().map(|o| o.value.as_str()).collect();
        let labels: Vec<&str> = selected.iter().map(|o| o.label.as_str()).collect();
        serde_json::json!({
            "event": "pick",
            "status": "confirmed",
            "selected": values,
            "labels": labels,
        })
        .to_string()
    } else {
        selected
            .iter()
            .map(|o| o.value.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
