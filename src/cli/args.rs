//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::config::RawSettings;
use crate::domain::DelimiterMode;

/// Wallpaper calculator: total area, cubic rooms and duplicate rooms
#[derive(Parser, Debug)]
#[command(name = "wallcalc")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Debug output, repeat for more detail (-d -d -d)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (default: ~/.config/wallcalc/wallcalc.toml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub calc: CalcArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments of the default calculation
#[derive(Args, Debug, Default)]
pub struct CalcArgs {
    /// Room file, one room per line (e.g. 2x3x4)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<String>,

    /// Field separator [default: x]
    #[arg(short = 's', long)]
    pub delimiter: Option<String>,

    /// Treat the delimiter as a regular expression
    #[arg(long)]
    pub regex: bool,

    /// Add the smallest face per room for wastage
    #[arg(long, overrides_with = "no_extra")]
    pub extra: bool,

    /// Leave out the wastage allowance
    #[arg(long, overrides_with = "extra")]
    pub no_extra: bool,

    /// Unit label for the total [default: feet]
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Skip blank lines instead of failing
    #[arg(long)]
    pub skip_blank: bool,

    /// Print only the total
    #[arg(long)]
    pub total_only: bool,
}

impl CalcArgs {
    /// Settings given on the command line; unset flags leave lower layers alone.
    pub fn overrides(&self) -> RawSettings {
        RawSettings {
            delimiter: self.delimiter.clone(),
            delimiter_mode: self.regex.then_some(DelimiterMode::Regex),
            add_extra: match (self.extra, self.no_extra) {
                (_, true) => Some(false),
                (true, false) => Some(true),
                (false, false) => None,
            },
            unit: self.unit.clone(),
            skip_blank_lines: self.skip_blank.then_some(true),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config path
    Path,
}
