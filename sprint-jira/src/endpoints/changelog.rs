use sprint_core::{ChangelogEvent, StatusTimes, WorkflowConfig};
use tracing::debug;

use crate::client::JiraClient;
use crate::consts::API_ROOT;
use crate::error::JiraError;
use crate::models::{ChangelogEntry, ValuesPage};

impl JiraClient {
  /// Fetch a ticket's complete changelog, flattened to one event per item,
  /// oldest first
  pub async fn get_changelog_events(&self, key: &str) -> Result<Vec<ChangelogEvent>, JiraError> {
    let url = self.url(&format!("{API_ROOT}/issue/{key}/changelog"));
    let label = format!("history for ticket {key}");

    let entries = self.fetch_all::<ValuesPage<ChangelogEntry>>(&url, &[], &label).await?;

    let mut events = Vec::new();
    for entry in entries {
      events.extend(entry.into_events(key)?);
    }
    Ok(events)
  }

  /// Derive a ticket's in-progress and done timestamps from its changelog
  pub async fn derive_status_times(&self, key: &str, workflow: &WorkflowConfig) -> Result<StatusTimes, JiraError> {
    let events = self.get_changelog_events(key).await?;
    let times = StatusTimes::from_events(&events, workflow);
    debug!(
      key,
      events = events.len(),
      in_progress = ?times.in_progress_at,
      done = ?times.done_at,
      "Derived status times"
    );
    Ok(times)
  }
}
