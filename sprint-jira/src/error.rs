use reqwest::StatusCode;
use sprint_core::TicketKeyError;
use thiserror::Error;

/// Errors returned by the Jira client
///
/// None of these are retried: any failure ends the report run.
#[derive(Debug, Error)]
pub enum JiraError {
  #[error("Authentication to Jira failed:\n{body}")]
  Authentication { body: String },

  #[error("Failed to get {label}: HTTP {status}\n{body}")]
  Api {
    label: String,
    status: StatusCode,
    body: String,
  },

  #[error("Failed to reach Jira while getting {label}")]
  Request {
    label: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("Failed to parse Jira response for {label}")]
  Parse {
    label: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("Jira returned an empty page of {label} at offset {start_at} before the last page")]
  EmptyPage { label: String, start_at: usize },

  #[error("Invalid timestamp '{raw}' in the history of {key}")]
  Timestamp {
    key: String,
    raw: String,
    #[source]
    source: chrono::ParseError,
  },

  #[error(transparent)]
  TicketKey(#[from] TicketKeyError),

  #[error("Failed to build HTTP client")]
  ClientBuild(#[source] reqwest::Error),
}
