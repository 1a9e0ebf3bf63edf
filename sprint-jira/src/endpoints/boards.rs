use crate::client::JiraClient;
use crate::consts::AGILE_ROOT;
use crate::error::JiraError;
use crate::models::{NamedItem, ValuesPage};

impl JiraClient {
  /// List every agile board visible to the user
  pub async fn list_boards(&self) -> Result<Vec<NamedItem>, JiraError> {
    let url = self.url(&format!("{AGILE_ROOT}/board"));
    self.fetch_all::<ValuesPage<NamedItem>>(&url, &[], "boards").await
  }

  /// List every sprint of a board, in the order Jira returns them
  pub async fn list_sprints(&self, board_id: u64) -> Result<Vec<NamedItem>, JiraError> {
    let url = self.url(&format!("{AGILE_ROOT}/board/{board_id}/sprint"));
    self.fetch_all::<ValuesPage<NamedItem>>(&url, &[], "sprints").await
  }
}
