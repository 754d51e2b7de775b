//! Command dispatch

use std::io;
use std::path::PathBuf;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::{DataSource, WallpaperReport};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::Room;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Config { command }) => execute_config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => execute_calculate(cli),
    }
}

/// Settings from file and environment, with command-line flags on top.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?;
    Ok(settings.apply(&cli.calc.overrides()))
}

#[instrument(skip(cli))]
fn execute_calculate(cli: &Cli) -> CliResult<()> {
    let source = DataSource::new(cli.calc.file.as_deref().unwrap_or_default())?;
    let settings = load_settings(cli)?;
    debug!("settings: {:?}", settings);

    let container = ServiceContainer::new(settings);
    let report = container.calculator().calculate(&source)?;
    print_report(&report, cli.calc.total_only);
    Ok(())
}

pub const CUBIC_HEADER: &str = "Cubic rooms";
pub const DUPLICATE_HEADER: &str = "Rooms with duplicates";

/// One line of the textual report.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportLine {
    Header(&'static str),
    Room(Room),
    /// Placeholder for a section without rooms
    Empty,
    Summary(String),
}

/// Report lines in output order: cubic rooms, duplicates, summary.
pub fn report_lines(report: &WallpaperReport, total_only: bool) -> Vec<ReportLine> {
    let mut lines = Vec::new();
    if !total_only {
        for (header, rooms) in [
            (CUBIC_HEADER, &report.cubic_rooms),
            (DUPLICATE_HEADER, &report.duplicate_rooms),
        ] {
            lines.push(ReportLine::Header(header));
            if rooms.is_empty() {
                lines.push(ReportLine::Empty);
            }
            lines.extend(rooms.iter().copied().map(ReportLine::Room));
        }
    }
    lines.push(ReportLine::Summary(report.summary_line()));
    lines
}

fn print_report(report: &WallpaperReport, total_only: bool) {
    for line in report_lines(report, total_only) {
        match line {
            ReportLine::Header(text) => output::header(text),
            ReportLine::Room(room) => output::detail(&room),
            ReportLine::Empty => output::none(),
            ReportLine::Summary(text) => output::info(&text),
        }
    }
}

fn config_target(cli: &Cli) -> CliResult<PathBuf> {
    cli.config
        .clone()
        .or_else(global_config_path)
        .ok_or_else(|| CliError::Usage("cannot determine config directory, use --config".into()))
}

fn execute_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            let path = config_target(cli)?;
            let state = if path.exists() { "" } else { " (not found)" };
            output::info(&format!("{}{}", path.display(), state));
            Ok(())
        }
        ConfigCommands::Init { force } => {
            let path = config_target(cli)?;
            let container = ServiceContainer::new(Settings::default());
            if container.fs.exists(&path) && !force {
                return Err(CliError::Usage(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            container
                .fs
                .ensure_parent(&path)
                .map_err(|e| InfraError::io(format!("create directory for {}", path.display()), e))?;
            container
                .fs
                .write(&path, &Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
    }
}
