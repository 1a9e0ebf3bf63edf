use sprint_core::{TicketSummary, WorkflowConfig, sort_by_ticket_number};
use tracing::debug;

use crate::client::JiraClient;
use crate::consts::{API_ROOT, QUERY_JQL};
use crate::error::JiraError;
use crate::models::SearchPage;

impl JiraClient {
  /// List the tickets of a sprint with their story points, ordered by
  /// ticket number
  pub async fn list_tickets(&self, sprint_id: u64, workflow: &WorkflowConfig) -> Result<Vec<TicketSummary>, JiraError> {
    let url = self.url(&format!("{API_ROOT}/search"));
    let query = [(QUERY_JQL, format!("sprint = {sprint_id}"))];

    let issues = self.fetch_all::<SearchPage>(&url, &query, "sprint tickets").await?;
    debug!(sprint_id, count = issues.len(), "Fetched sprint tickets");

    let tickets = issues
      .into_iter()
      .map(|issue| {
        let (estimated, actual) = issue.story_points(workflow);
        TicketSummary::new(issue.key, estimated, actual)
      })
      .collect();

    Ok(sort_by_ticket_number(tickets)?)
  }
}
