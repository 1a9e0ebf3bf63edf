//! # Report Command
//!
//! Chooses a sprint, fetches every ticket's history and prints the
//! tab-separated report to stdout.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use sprint_core::{TicketRecord, WorkflowConfig, choose_from_terminal, write_report};
use sprint_jira::auth::create_jira_runtime_and_client;
use sprint_jira::{JiraClient, NamedItem};
use tracing::info;

use super::init::load_or_init;

/// Command for printing the sprint report
#[derive(Args, Default)]
pub struct ReportArgs {
  /// Report on this sprint id instead of choosing one
  #[arg(long, value_name = "ID")]
  pub sprint: Option<u64>,

  /// Choose from the sprints of this board instead of the configured one
  #[arg(long, value_name = "ID")]
  pub board: Option<u64>,
}

pub(crate) fn handle_report_command(args: ReportArgs, config_path: &Path) -> Result<()> {
  let config = load_or_init(config_path)?;
  let (rt, client) = create_jira_runtime_and_client(&config)?;

  let sprint_id = match args.sprint {
    Some(sprint_id) => sprint_id,
    None => {
      let board_id = args.board.unwrap_or(config.board.board_id);
      let sprints = rt.block_on(client.list_sprints(board_id))?;
      choose_from_terminal(sprints.into_iter().map(NamedItem::into_choice), "sprint")?
    }
  };
  info!(sprint_id, "Building sprint report");

  let records = rt.block_on(collect_records(&client, sprint_id, &config.workflow))?;

  let stdout = io::stdout();
  let mut out = stdout.lock();
  writeln!(out)?;
  write_report(&mut out, &records, &Local).context("Failed to write report")?;
  out.flush()?;

  Ok(())
}

/// Fetch the sprint's tickets and derive each one's status times, one
/// request at a time.
async fn collect_records(client: &JiraClient, sprint_id: u64, workflow: &WorkflowConfig) -> Result<Vec<TicketRecord>> {
  let tickets = client.list_tickets(sprint_id, workflow).await?;
  println!("Found {} tickets in sprint, fetching ticket history", tickets.len());

  let mut records = Vec::with_capacity(tickets.len());
  for ticket in tickets {
    println!("Getting history for ticket {}", ticket.key);
    let status = client.derive_status_times(&ticket.key, workflow).await?;
    records.push(TicketRecord::new(ticket, status));
  }

  Ok(records)
}
