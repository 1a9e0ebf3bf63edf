//! # Paginated Fetching
//!
//! Walks a paged Jira collection from offset 0 until the server reports the
//! last page. The offset advances by the number of items actually returned,
//! since Jira may cap the requested page size.

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::client::JiraClient;
use crate::consts::{QUERY_MAX_RESULTS, QUERY_START_AT};
use crate::error::JiraError;
use crate::models::{JiraIssue, SearchPage, ValuesPage};

/// A single page of a paged Jira collection
pub trait Page: DeserializeOwned {
  type Item;

  /// Number of items on this page.
  fn item_count(&self) -> usize;

  /// Whether this is the final page, given the offset reached once this
  /// page's items are consumed.
  fn is_last(&self, next_start_at: usize) -> bool;

  fn into_items(self) -> Vec<Self::Item>;
}

impl<T: DeserializeOwned> Page for ValuesPage<T> {
  type Item = T;

  fn item_count(&self) -> usize {
    self.values.len()
  }

  fn is_last(&self, _next_start_at: usize) -> bool {
    self.is_last
  }

  fn into_items(self) -> Vec<T> {
    self.values
  }
}

impl Page for SearchPage {
  type Item = JiraIssue;

  fn item_count(&self) -> usize {
    self.issues.len()
  }

  fn is_last(&self, next_start_at: usize) -> bool {
    next_start_at >= self.total
  }

  fn into_items(self) -> Vec<JiraIssue> {
    self.issues
  }
}

impl JiraClient {
  /// Fetch every item of a paged collection, in server order.
  ///
  /// `query` is sent with every request in addition to the paging
  /// parameters. `label` names the collection in errors and logs.
  pub(crate) async fn fetch_all<P: Page>(
    &self,
    url: &str,
    query: &[(&str, String)],
    label: &str,
  ) -> Result<Vec<P::Item>, JiraError> {
    let mut items = Vec::new();
    let mut start_at = 0;

    loop {
      debug!(url, start_at, page_size = self.page_size, "Requesting page of {label}");

      let response = self
        .client
        .get(url)
        .basic_auth(&self.auth.username, Some(&self.auth.api_token))
        .query(&[
          (QUERY_MAX_RESULTS, self.page_size.to_string()),
          (QUERY_START_AT, start_at.to_string()),
        ])
        .query(query)
        .send()
        .await
        .map_err(|source| JiraError::Request {
          label: label.to_string(),
          source,
        })?;

      let status = response.status();
      if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(JiraError::Api {
          label: label.to_string(),
          status,
          body,
        });
      }

      let page: P = response.json().await.map_err(|source| JiraError::Parse {
        label: label.to_string(),
        source,
      })?;

      let count = page.item_count();
      let page_start = start_at;
      start_at += count;
      let last = page.is_last(start_at);
      trace!(count, last, "Received page of {label}");

      items.extend(page.into_items());

      if last {
        break;
      }
      if count == 0 {
        return Err(JiraError::EmptyPage {
          label: label.to_string(),
          start_at: page_start,
        });
      }
    }

    debug!(total = items.len(), "Fetched all {label}");
    Ok(items)
  }
}
