//! # Credentials
//!
//! The Jira account used for every request. Only the username and API token
//! are kept; both are combined into a Basic auth header by the client.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents credentials for the Jira API
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
  /// The Jira account username, usually an email address.
  pub username: String,
  /// An API token for the Jira account.
  pub api_token: String,
}

impl Credentials {
  pub fn new(username: impl Into<String>, api_token: impl Into<String>) -> Self {
    Self {
      username: username.into(),
      api_token: api_token.into(),
    }
  }
}

// Keep tokens out of logs and error chains.
impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("username", &self.username)
      .field("api_token", &"<redacted>")
      .finish()
  }
}
