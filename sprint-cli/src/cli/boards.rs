//! # Board and Sprint Listings
//!
//! Non-interactive listings of boards and sprints as `<id>\t<name>` lines,
//! sorted by name like the selection prompt.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use clap::Args;
use sprint_core::sorted_choices;
use sprint_jira::NamedItem;
use sprint_jira::auth::create_jira_runtime_and_client;

use super::init::require_config;

/// Command for listing the sprints of a board
#[derive(Args)]
pub struct SprintsArgs {
  /// List sprints of this board instead of the configured one
  #[arg(long, value_name = "ID")]
  pub board: Option<u64>,
}

pub(crate) fn handle_boards_command(config_path: &Path) -> Result<()> {
  let config = require_config(config_path)?;
  let (rt, client) = create_jira_runtime_and_client(&config)?;

  let boards = rt.block_on(client.list_boards())?;
  print_listing(boards)
}

pub(crate) fn handle_sprints_command(args: SprintsArgs, config_path: &Path) -> Result<()> {
  let config = require_config(config_path)?;
  let (rt, client) = create_jira_runtime_and_client(&config)?;

  let board_id = args.board.unwrap_or(config.board.board_id);
  let sprints = rt.block_on(client.list_sprints(board_id))?;
  print_listing(sprints)
}

fn print_listing(items: Vec<NamedItem>) -> Result<()> {
  let stdout = io::stdout();
  let mut out = stdout.lock();
  write_listing(&mut out, items)?;
  out.flush()?;
  Ok(())
}

fn write_listing<W: Write>(out: &mut W, items: Vec<NamedItem>) -> io::Result<()> {
  for (name, id) in sorted_choices(items.into_iter().map(NamedItem::into_choice)) {
    writeln!(out, "{id}\t{name}")?;
  }
  Ok(())
}
