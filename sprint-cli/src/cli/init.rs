//! # Init Command
//!
//! First-run setup: prompt for credentials, validate them, choose a board and
//! write the configuration file. The report command falls back to this flow
//! when no configuration exists.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use sprint_core::config::ensure_not_directory;
use sprint_core::output::format_path;
use sprint_core::prompts::prompt_credentials;
use sprint_core::{
  BoardSettings, HttpSettings, ReportConfig, WorkflowConfig, choose_from_terminal, load_config, print_info,
  print_success, print_warning, save_config,
};
use sprint_jira::NamedItem;
use sprint_jira::auth::{create_jira_client_for, create_jira_runtime};
use tracing::info;

/// Command for writing the configuration file
#[derive(Args, Default)]
pub struct InitArgs {
  /// Overwrite an existing configuration file
  #[arg(long, short = 'f')]
  pub force: bool,
}

pub(crate) fn handle_init_command(args: InitArgs, config_path: &Path) -> Result<()> {
  ensure_not_directory(config_path)?;

  if config_path.exists() && !args.force {
    print_warning(&format!(
      "Configuration file {} already exists. Use --force to replace it.",
      format_path(&config_path.display().to_string())
    ));
    return Ok(());
  }

  run_setup(config_path)?;
  Ok(())
}

/// Load the configuration, running the setup prompts if there is none yet.
pub(crate) fn load_or_init(config_path: &Path) -> Result<ReportConfig> {
  match load_config(config_path)? {
    Some(config) => {
      print_info(&format!("Found configuration file {}, loading", config_path.display()));
      Ok(config)
    }
    None => {
      print_info("No configuration file found");
      run_setup(config_path)
    }
  }
}

/// Load the configuration for commands that cannot run the setup prompts.
pub(crate) fn require_config(config_path: &Path) -> Result<ReportConfig> {
  load_config(config_path)?.with_context(|| {
    format!(
      "No configuration file found at {}. Run `sprint-report init` first.",
      config_path.display()
    )
  })
}

fn run_setup(config_path: &Path) -> Result<ReportConfig> {
  let credentials = prompt_credentials()?;
  let http = HttpSettings::default();

  let rt = create_jira_runtime()?;
  let client = create_jira_client_for(&credentials, &http)?;

  rt.block_on(client.check_credentials())?;
  info!(username = %credentials.username, "Jira credentials accepted");

  let boards = rt.block_on(client.list_boards())?;
  let board_id = choose_from_terminal(boards.into_iter().map(NamedItem::into_choice), "Jira board")?;

  let config = ReportConfig {
    credentials,
    board: BoardSettings { board_id },
    http,
    workflow: WorkflowConfig::default(),
  };
  save_config(config_path, &config)?;

  print_success(&format!(
    "Wrote configuration to {}. To make changes to the configuration you can edit that file manually \
     or delete it to run this initialization routine again.",
    config_path.display()
  ));

  Ok(config)
}
