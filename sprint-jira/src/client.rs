use std::time::Duration;

use reqwest::Client;
use sprint_core::consts::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
use tracing::debug;

use crate::consts::{API_ROOT, USER_AGENT};
use crate::error::JiraError;
use crate::models::JiraAuth;

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
  pub(crate) page_size: u32,
}

impl JiraClient {
  /// Create a new Jira client with the default timeout and page size
  pub fn new(base_url: &str, auth: JiraAuth) -> Result<Self, JiraError> {
    Self::with_timeout(base_url, auth, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
  }

  /// Create a new Jira client whose requests fail after `timeout`
  pub fn with_timeout(base_url: &str, auth: JiraAuth, timeout: Duration) -> Result<Self, JiraError> {
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(USER_AGENT)
      .build()
      .map_err(JiraError::ClientBuild)?;

    Ok(Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
      page_size: DEFAULT_PAGE_SIZE,
    })
  }

  /// Set the number of items requested per page
  pub fn with_page_size(mut self, page_size: u32) -> Self {
    self.page_size = page_size.max(1);
    self
  }

  /// The base URL requests are made against
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub(crate) fn url(&self, path: &str) -> String {
    format!("{}{path}", self.base_url)
  }

  /// Verify the credentials by fetching the current user
  pub async fn check_credentials(&self) -> Result<(), JiraError> {
    let url = self.url(&format!("{API_ROOT}/myself"));
    debug!(%url, "Checking Jira credentials");

    let response = self
      .client
      .get(&url)
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .send()
      .await
      .map_err(|source| JiraError::Request {
        label: "user".to_string(),
        source,
      })?;

    if response.status().is_success() {
      return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(JiraError::Authentication { body })
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, username: &str, api_token: &str) -> Result<JiraClient, JiraError> {
  let auth = JiraAuth {
    username: username.to_string(),
    api_token: api_token.to_string(),
  };

  JiraClient::new(base_url, auth)
}
