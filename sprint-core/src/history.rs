//! # Changelog Reduction
//!
//! Derives when a ticket entered "in progress" and "done" from the status
//! transitions in its changelog.
//!
//! A done time survives only if no later status transition leaves "done".
//! Any non-done transition clears the recorded done time, even one that is
//! later followed by another move into "done" (which then records the new
//! time). Reopened tickets therefore report only their final completion.

use chrono::{DateTime, FixedOffset};

use crate::config::WorkflowConfig;
use crate::consts::STATUS_FIELD_ID;

/// Jira's changelog timestamp layout, e.g. `2023-05-01T10:20:30.123-0700`.
const JIRA_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Parse a changelog timestamp.
///
/// Accepts Jira's offset-without-colon layout as well as RFC 3339.
pub fn parse_jira_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
  DateTime::parse_from_rfc3339(raw).or_else(|_| DateTime::parse_from_str(raw, JIRA_TIMESTAMP_FORMAT))
}

/// A single field change from a ticket's changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEvent {
  pub timestamp: DateTime<FixedOffset>,
  /// The changed field, e.g. `status`. Some legacy items carry none.
  pub field_id: Option<String>,
  /// Id of the value the field moved to.
  pub to: Option<String>,
}

impl ChangelogEvent {
  pub fn status(timestamp: DateTime<FixedOffset>, to: impl Into<String>) -> Self {
    Self {
      timestamp,
      field_id: Some(STATUS_FIELD_ID.to_string()),
      to: Some(to.into()),
    }
  }

  fn is_status_change(&self) -> bool {
    self.field_id.as_deref() == Some(STATUS_FIELD_ID)
  }
}

/// The two timestamps derived from a ticket's status history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTimes {
  /// Earliest transition into "in progress".
  pub in_progress_at: Option<DateTime<FixedOffset>>,
  /// Latest transition into "done" not followed by a move out of "done".
  pub done_at: Option<DateTime<FixedOffset>>,
}

impl StatusTimes {
  /// Reduce an oldest-first sequence of changelog events.
  pub fn from_events<'a, I>(events: I, workflow: &WorkflowConfig) -> Self
  where
    I: IntoIterator<Item = &'a ChangelogEvent>,
  {
    events
      .into_iter()
      .fold(Self::default(), |times, event| times.apply(event, workflow))
  }

  /// Fold one event into the running result.
  pub fn apply(self, event: &ChangelogEvent, workflow: &WorkflowConfig) -> Self {
    if !event.is_status_change() {
      return self;
    }

    let mut next = self;
    let target = event.to.as_deref();
    let is_done = target == Some(workflow.done_status_id.as_str());

    if target == Some(workflow.in_progress_status_id.as_str())
      && next.in_progress_at.is_none_or(|earliest| event.timestamp < earliest)
    {
      next.in_progress_at = Some(event.timestamp);
    }

    if is_done && next.done_at.is_none_or(|latest| event.timestamp > latest) {
      next.done_at = Some(event.timestamp);
    }

    if !is_done {
      next.done_at = None;
    }

    next
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const IN_PROGRESS: &str = "10685";
  const DONE: &str = "10686";
  const TO_DO: &str = "10684";

  fn ts(raw: &str) -> DateTime<FixedOffset> {
    parse_jira_timestamp(raw).unwrap()
  }

  fn reduce(events: &[ChangelogEvent]) -> StatusTimes {
    StatusTimes::from_events(events, &WorkflowConfig::default())
  }

  #[test]
  fn test_parse_jira_timestamp_formats() {
    let jira = ts("2023-05-01T10:20:30.123-0700");
    let rfc = ts("2023-05-01T17:20:30.123Z");
    assert_eq!(jira, rfc);

    let no_fraction = ts("2023-05-01T10:20:30-0700");
    assert_eq!(no_fraction.timestamp(), jira.timestamp());

    assert!(parse_jira_timestamp("yesterday").is_err());
  }

  #[test]
  fn test_empty_history() {
    assert_eq!(reduce(&[]), StatusTimes::default());
  }

  #[test]
  fn test_simple_progression() {
    let t1 = ts("2023-05-01T09:00:00.000-0700");
    let t2 = ts("2023-05-03T16:30:00.000-0700");
    let events = vec![ChangelogEvent::status(t1, IN_PROGRESS), ChangelogEvent::status(t2, DONE)];

    let times = reduce(&events);
    assert_eq!(times.in_progress_at, Some(t1));
    assert_eq!(times.done_at, Some(t2));
  }

  #[test]
  fn test_only_final_done_survives() {
    let t1 = ts("2023-05-01T09:00:00.000-0700");
    let t2 = ts("2023-05-02T09:00:00.000-0700");
    let t3 = ts("2023-05-03T09:00:00.000-0700");
    let t4 = ts("2023-05-04T09:00:00.000-0700");
    let events = vec![
      ChangelogEvent::status(t1, IN_PROGRESS),
      ChangelogEvent::status(t2, DONE),
      ChangelogEvent::status(t3, IN_PROGRESS),
      ChangelogEvent::status(t4, DONE),
    ];

    let times = reduce(&events);
    assert_eq!(times.in_progress_at, Some(t1));
    assert_eq!(times.done_at, Some(t4));
  }

  #[test]
  fn test_reopened_ticket_has_no_done_time() {
    let t1 = ts("2023-05-01T09:00:00.000-0700");
    let t2 = ts("2023-05-02T09:00:00.000-0700");
    let events = vec![ChangelogEvent::status(t1, DONE), ChangelogEvent::status(t2, IN_PROGRESS)];

    let times = reduce(&events);
    assert_eq!(times.in_progress_at, Some(t2));
    assert_eq!(times.done_at, None);
  }

  #[test]
  fn test_any_other_status_clears_done() {
    let t1 = ts("2023-05-01T09:00:00.000-0700");
    let t2 = ts("2023-05-02T09:00:00.000-0700");
    let events = vec![ChangelogEvent::status(t1, DONE), ChangelogEvent::status(t2, TO_DO)];

    assert_eq!(reduce(&events).done_at, None);
  }

  #[test]
  fn test_status_change_without_target_clears_done() {
    let t1 = ts("2023-05-01T09:00:00.000-0700");
    let t2 = ts("2023-05-02T09:00:00.000-0700");
    let events = vec![
      ChangelogEvent::status(t1, DONE),
      ChangelogEvent {
        timestamp: t2,
        field_id: Some(STATUS_FIELD_ID.to_string()),
        to: None,
      },
    ];

    assert_eq!(reduce(&events).done_at, None);
  }

  #[test]
  fn test_non_status_fields_are_ignored() {
    let t1 = ts("2023-05-01T09:00:00.000-0700");
    let t2 = ts("2023-05-02T09:00:00.000-0700");
    let events = vec![
      ChangelogEvent::status(t1, DONE),
      ChangelogEvent {
        timestamp: t2,
        field_id: Some("assignee".to_string()),
        to: Some("abc123".to_string()),
      },
      ChangelogEvent {
        timestamp: t2,
        field_id: None,
        to: Some(IN_PROGRESS.to_string()),
      },
    ];

    let times = reduce(&events);
    assert_eq!(times.done_at, Some(t1));
    assert_eq!(times.in_progress_at, None);
  }

  #[test]
  fn test_earliest_in_progress_wins() {
    let t1 = ts("2023-05-01T09:00:00.000-0700");
    let t2 = ts("2023-05-05T09:00:00.000-0700");
    let events = vec![
      ChangelogEvent::status(t2, IN_PROGRESS),
      ChangelogEvent::status(t1, IN_PROGRESS),
    ];

    assert_eq!(reduce(&events).in_progress_at, Some(t1));
  }

  #[test]
  fn test_earlier_done_does_not_replace_later_done() {
    let t1 = ts("2023-05-01T09:00:00.000-0700");
    let t2 = ts("2023-05-05T09:00:00.000-0700");
    let events = vec![ChangelogEvent::status(t2, DONE), ChangelogEvent::status(t1, DONE)];

    assert_eq!(reduce(&events).done_at, Some(t2));
  }

  #[test]
  fn test_reduction_is_idempotent() {
    let events = vec![
      ChangelogEvent::status(ts("2023-05-01T09:00:00.000-0700"), IN_PROGRESS),
      ChangelogEvent::status(ts("2023-05-02T09:00:00.000-0700"), DONE),
      ChangelogEvent::status(ts("2023-05-03T09:00:00.000-0700"), TO_DO),
      ChangelogEvent::status(ts("2023-05-04T09:00:00.000-0700"), DONE),
    ];

    assert_eq!(reduce(&events), reduce(&events));
  }

  #[test]
  fn test_custom_workflow_ids() {
    let workflow = WorkflowConfig {
      in_progress_status_id: "3".to_string(),
      done_status_id: "10001".to_string(),
      ..WorkflowConfig::default()
    };
    let t1 = ts("2023-05-01T09:00:00.000-0700");
    let t2 = ts("2023-05-02T09:00:00.000-0700");
    let events = [ChangelogEvent::status(t1, "3"), ChangelogEvent::status(t2, "10001")];

    let times = StatusTimes::from_events(&events, &workflow);
    assert_eq!(times.in_progress_at, Some(t1));
    assert_eq!(times.done_at, Some(t2));
  }
}
