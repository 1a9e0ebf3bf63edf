//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for sprint-report. Running
//! without a subcommand produces the report.

mod boards;
mod check;
mod init;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use sprint_core::{ColorMode, get_config_dirs};
use tracing::debug;

/// Top-level CLI command for sprint-report
#[derive(Parser)]
#[command(name = "sprint-report")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Report story points and status timestamps for the tickets of a Jira sprint")]
#[command(
  long_about = "Lists the tickets of a Jira sprint with their estimated and actual story points\n\
        and the times each ticket entered \"in progress\" and \"done\".\n\n\
        The report is tab separated so it can be pasted into a spreadsheet. On the first run\n\
        you are asked for Jira credentials and a board, which are saved for later runs."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Path to the configuration file
  #[arg(
    long,
    global = true,
    value_name = "PATH",
    long_help = "Path to the configuration file.\n\n\
             Defaults to config.toml in the sprint-report config directory\n\
             (e.g. ~/.config/sprint-report/config.toml on Linux)."
  )]
  pub config: Option<PathBuf>,

  /// Subcommands
  #[command(subcommand)]
  pub command: Option<Commands>,
}

/// Subcommands for sprint-report
#[derive(Subcommand)]
pub enum Commands {
  /// Print the sprint report (default)
  #[command(long_about = "Print the sprint report.\n\n\
            Loads the configuration (running the setup prompts if there is none), asks\n\
            which sprint of the configured board to report on, then fetches the history\n\
            of every ticket in that sprint.")]
  Report(report::ReportArgs),

  /// Set up credentials and the board
  #[command(long_about = "Prompt for Jira credentials and a board, then write the configuration file.\n\n\
            An existing configuration file is left untouched unless --force is given.")]
  Init(init::InitArgs),

  /// Check that the configured credentials are accepted by Jira
  Check,

  /// List the boards visible to the configured user
  Boards,

  /// List the sprints of a board
  Sprints(boards::SprintsArgs),
}

/// Where the configuration file lives for this run
fn resolve_config_path(config: Option<PathBuf>) -> Result<PathBuf> {
  match config {
    Some(path) => Ok(path),
    None => Ok(
      get_config_dirs()
        .context("Failed to locate the configuration directory")?
        .config_path(),
    ),
  }
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  let config_path = resolve_config_path(cli.config)?;
  debug!(path = %config_path.display(), "Using configuration file");

  match cli.command {
    None => report::handle_report_command(report::ReportArgs::default(), &config_path),
    Some(Commands::Report(args)) => report::handle_report_command(args, &config_path),
    Some(Commands::Init(args)) => init::handle_init_command(args, &config_path),
    Some(Commands::Check) => check::handle_check_command(&config_path),
    Some(Commands::Boards) => boards::handle_boards_command(&config_path),
    Some(Commands::Sprints(args)) => boards::handle_sprints_command(args, &config_path),
  }
}
