use serde::Deserialize;
use serde_json::{Map, Value};
use sprint_core::{ChangelogEvent, WorkflowConfig, parse_jira_timestamp};

use crate::error::JiraError;

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

/// A page from an agile or changelog endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuesPage<T> {
  pub is_last: bool,
  #[serde(default = "Vec::new")]
  pub values: Vec<T>,
}

/// A page from the issue search endpoint, which reports a total instead of a
/// last-page flag
#[derive(Debug, Deserialize)]
pub struct SearchPage {
  pub total: usize,
  #[serde(default)]
  pub issues: Vec<JiraIssue>,
}

/// A board or sprint, as offered for selection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedItem {
  pub id: u64,
  pub name: String,
}

impl NamedItem {
  /// The `(name, id)` pair used by the selection prompt
  pub fn into_choice(self) -> (String, u64) {
    (self.name, self.id)
  }
}

/// Represents a Jira issue from a search
#[derive(Debug, Deserialize)]
pub struct JiraIssue {
  pub key: String,
  #[serde(default)]
  pub fields: Map<String, Value>,
}

impl JiraIssue {
  /// Read a numeric field, treating missing, null and non-numeric values as
  /// absent
  pub fn number_field(&self, field: &str) -> Option<f64> {
    self.fields.get(field).and_then(Value::as_f64)
  }

  /// Story points as `(estimated, actual)` according to the workflow's
  /// custom fields
  pub fn story_points(&self, workflow: &WorkflowConfig) -> (Option<f64>, Option<f64>) {
    (
      self.number_field(&workflow.estimated_points_field),
      self.number_field(&workflow.actual_points_field),
    )
  }
}

/// One entry of an issue changelog: a set of field changes made together
#[derive(Debug, Deserialize)]
pub struct ChangelogEntry {
  pub created: String,
  #[serde(default)]
  pub items: Vec<ChangelogItem>,
}

/// A single field change within a changelog entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogItem {
  #[serde(default)]
  pub field_id: Option<String>,
  #[serde(default)]
  pub to: Option<String>,
}

impl ChangelogEntry {
  /// Expand this entry into one event per item, in item order
  pub fn into_events(self, key: &str) -> Result<Vec<ChangelogEvent>, JiraError> {
    let timestamp = parse_jira_timestamp(&self.created).map_err(|source| JiraError::Timestamp {
      key: key.to_string(),
      raw: self.created.clone(),
      source,
    })?;

    Ok(
      self
        .items
        .into_iter()
        .map(|item| ChangelogEvent {
          timestamp,
          field_id: item.field_id,
          to: item.to,
        })
        .collect(),
    )
  }
}
