//! Client construction from the persisted configuration.
//!
//! These helpers centralize credential and connection settings so every CLI
//! command builds its Jira client and runtime the same way.

use std::time::Duration;

use anyhow::{Context, Result};
use sprint_core::{Credentials, HttpSettings, ReportConfig};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::JiraClient;
use crate::models::JiraAuth;

/// Creates an authenticated Jira client for the given credentials and
/// connection settings.
pub fn create_jira_client_for(credentials: &Credentials, http: &HttpSettings) -> Result<JiraClient> {
  let base_url = http.base_url()?;
  debug!(%base_url, timeout_secs = http.timeout_secs, page_size = http.page_size, "Creating Jira client");

  let auth = JiraAuth {
    username: credentials.username.clone(),
    api_token: credentials.api_token.clone(),
  };
  let client = JiraClient::with_timeout(&base_url, auth, Duration::from_secs(http.timeout_secs))
    .context("Failed to create Jira client")?
    .with_page_size(http.page_size);

  Ok(client)
}

/// Creates a single-threaded tokio runtime for driving requests one at a
/// time.
pub fn create_jira_runtime() -> Result<Runtime> {
  Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")
}

/// Creates a tokio runtime and an authenticated Jira client.
pub fn create_jira_runtime_and_client(config: &ReportConfig) -> Result<(Runtime, JiraClient)> {
  let rt = create_jira_runtime()?;
  let client = create_jira_client_for(&config.credentials, &config.http)?;
  Ok((rt, client))
}
