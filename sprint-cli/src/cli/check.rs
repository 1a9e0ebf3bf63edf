//! # Check Command
//!
//! Validates the configured credentials against Jira.

use std::path::Path;

use anyhow::Result;
use sprint_core::print_success;
use sprint_jira::auth::create_jira_runtime_and_client;

use super::init::require_config;

pub(crate) fn handle_check_command(config_path: &Path) -> Result<()> {
  let config = require_config(config_path)?;
  let (rt, client) = create_jira_runtime_and_client(&config)?;

  rt.block_on(client.check_credentials())?;

  print_success(&format!(
    "Jira credentials for {} are valid on {}",
    config.credentials.username,
    client.base_url()
  ));
  Ok(())
}
