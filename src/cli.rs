//! CLI Argument Parsing
//!
//! Flags given on the command line override the `[picker]` table of the
//! picker file.

use std::path::PathBuf;

use clap::Parser;

use picklist::PickerConfig;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Picklist - pick several values from a list or tree in the terminal
#[derive(Parser, Debug)]
#[command(name = "picklist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Picker file (TOML) describing options and settings
    pub file: PathBuf,

    /// Print the selection as JSON
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write log records to this file
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Validate the picker file and exit
    #[arg(long)]
    pub check: bool,

    /// Show options as an expandable tree
    #[arg(long, conflicts_with = "group_by")]
    pub nested: bool,

    /// Group flat options under their `group` label
    #[arg(long)]
    pub group_by: bool,

    /// Expand every branch initially
    #[arg(long)]
    pub expand_all: bool,

    /// Maximum number of selections
    #[arg(long, value_name = "N")]
    pub max: Option<usize>,

    /// Close the dropdown after each selection
    #[arg(long)]
    pub close_on_select: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the file settings
    pub fn apply_overrides(&self, config: &mut PickerConfig) {
        if self.nested {
            config.nested = true;
        }
        if self.group_by {
            config.group_by = true;
        }
        if self.expand_all {
            config.expand_all_by_default = true;
        }
        if let Some(max) = self.max {
            config.max_selected = Some(max);
        }
        if self.close_on_select {
            config.close_on_select = true;
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
