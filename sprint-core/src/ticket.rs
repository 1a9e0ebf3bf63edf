//! # Sprint Tickets
//!
//! Ticket summaries as listed from a sprint, their ordering by ticket number,
//! and the per-ticket record that feeds the report.

use thiserror::Error;

use crate::history::StatusTimes;

/// Errors raised while interpreting ticket keys
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TicketKeyError {
  #[error("Ticket key '{0}' is not of the form PREFIX-NUMBER")]
  Malformed(String),
  #[error("Ticket number in '{0}' does not fit in 64 bits")]
  TooLarge(String),
}

/// A ticket as returned by the sprint search
#[derive(Debug, Clone, PartialEq)]
pub struct TicketSummary {
  pub key: String,
  pub estimated_points: Option<f64>,
  pub actual_points: Option<f64>,
}

impl TicketSummary {
  pub fn new(key: impl Into<String>, estimated_points: Option<f64>, actual_points: Option<f64>) -> Self {
    Self {
      key: key.into(),
      estimated_points,
      actual_points,
    }
  }
}

/// A ticket summary combined with its derived status timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct TicketRecord {
  pub summary: TicketSummary,
  pub status: StatusTimes,
}

impl TicketRecord {
  pub fn new(summary: TicketSummary, status: StatusTimes) -> Self {
    Self { summary, status }
  }
}

/// Extract the number from a `PREFIX-NUMBER` ticket key.
pub fn ticket_number(key: &str) -> Result<u64, TicketKeyError> {
  let malformed = || TicketKeyError::Malformed(key.to_string());

  let (prefix, number) = key.split_once('-').ok_or_else(malformed)?;
  if prefix.is_empty() || number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
    return Err(malformed());
  }

  // Only digits remain, so overflow is the sole parse failure
  number
    .parse::<u64>()
    .map_err(|_overflow| TicketKeyError::TooLarge(key.to_string()))
}

/// Sort tickets by their ticket number rather than lexicographically.
///
/// Assumes every ticket belongs to the same project; the prefix is not
/// compared. Fails if any key is malformed. Tickets with equal numbers keep
/// their relative order.
pub fn sort_by_ticket_number(tickets: Vec<TicketSummary>) -> Result<Vec<TicketSummary>, TicketKeyError> {
  let mut numbered = tickets
    .into_iter()
    .map(|ticket| Ok((ticket_number(&ticket.key)?, ticket)))
    .collect::<Result<Vec<_>, TicketKeyError>>()?;

  numbered.sort_by_key(|(number, _)| *number);

  Ok(numbered.into_iter().map(|(_, ticket)| ticket).collect())
}
