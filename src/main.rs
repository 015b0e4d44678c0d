//! Picklist CLI - interactive multi-value picker
//!
//! Usage: picklist [OPTIONS] <FILE>
//!
//! Loads options from a picker file, runs the picker in the terminal and
//! prints the chosen values (one per line, or JSON with `--json`).

mod cli;

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{Config, WriteLogger};

use cli::{Cli, ColorWhen};
use picklist::ui::input::run_interactive;
use picklist::ui::output::{format_selection, print_config_warnings};
use picklist::ui::terminal::detect_capabilities;
use picklist::ui::theme::Icons;
use picklist::config::grouping_conflict;
use picklist::{Picker, PickerFile};

/// Exit status when the user aborts with ctrl+c
const EXIT_ABORTED: i32 = 130;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        let log_file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        WriteLogger::init(cli.log_level(), Config::default(), log_file)
            .context("failed to initialise logger")?;
    }

    let mut caps = detect_capabilities();
    match cli.color {
        Some(ColorWhen::Always) => caps.supports_color = true,
        Some(ColorWhen::Never) => caps.supports_color = false,
        Some(ColorWhen::Auto) | None => {}
    }
    let icons = Icons::new(caps.supports_unicode);

    let (mut file, mut warnings) = PickerFile::load_with_warnings(&cli.file)?;
    cli.apply_overrides(&mut file.picker);
    if !warnings.iter().any(|w| w.key == "group_by") {
        warnings.extend(grouping_conflict(&file.picker, &cli.file, None));
    }
    print_config_warnings(&warnings, icons.warning);
    log::info!(
        "loaded {} top-level options from {}",
        file.options.len(),
        cli.file.display()
    );

    if cli.check {
        if cli.json {
            let output = serde_json::json!({
                "event": "check",
                "status": "ok",
                "options": file.options.len(),
                "warnings": warnings.len(),
            });
            println!("{}", output);
        } else {
            println!("{} is valid ({} warnings)", cli.file.display(), warnings.len());
        }
        return Ok(());
    }

    if !caps.is_tty {
        anyhow::bail!("picklist needs an interactive terminal (stdin and stdout must be a TTY)");
    }

    let initial = file.initial_selection();
    let mut picker = Picker::builder(file.options)
        .config(file.picker)
        .default_value(initial)
        .build();

    match run_interactive(&mut picker, caps)? {
        Some(selected) => {
            log::info!("confirmed {} selections", selected.len());
            let output = format_selection(&selected, cli.json);
            if !output.is_empty() {
                println!("{}", output);
            }
            Ok(())
        }
        None => {
            log::info!("aborted");
            std::process::exit(EXIT_ABORTED);
        }
    }
}
