//! # Report Rendering
//!
//! Renders ticket records as tab-separated lines for pasting into a
//! spreadsheet. Spreadsheet imports choke on zone-qualified timestamps, so
//! times are shifted into the target zone and printed without an offset.

use std::fmt::Display;
use std::io::{self, Write};

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::ticket::TicketRecord;

/// Header row of the report.
pub const REPORT_HEADER: &str = "Ticket ID\tEst. SP\tAct. SP\tIn Prog\tDone";

/// Timestamp layout used in report cells.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn format_points(points: Option<f64>) -> String {
  points.map(|p| p.to_string()).unwrap_or_default()
}

fn format_timestamp<Tz>(timestamp: Option<DateTime<FixedOffset>>, tz: &Tz) -> String
where
  Tz: TimeZone,
  Tz::Offset: Display,
{
  timestamp
    .map(|t| t.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string())
    .unwrap_or_default()
}

/// Render one report row, converting timestamps into `tz`.
///
/// Absent points and timestamps render as empty cells, never zero.
pub fn render_row<Tz>(record: &TicketRecord, tz: &Tz) -> String
where
  Tz: TimeZone,
  Tz::Offset: Display,
{
  [
    record.summary.key.clone(),
    format_points(record.summary.estimated_points),
    format_points(record.summary.actual_points),
    format_timestamp(record.status.in_progress_at, tz),
    format_timestamp(record.status.done_at, tz),
  ]
  .join("\t")
}

/// Write the header and one row per record.
pub fn write_report<W, Tz>(writer: &mut W, records: &[TicketRecord], tz: &Tz) -> io::Result<()>
where
  W: Write,
  Tz: TimeZone,
  Tz::Offset: Display,
{
  writeln!(writer, "{REPORT_HEADER}")?;
  for record in records {
    writeln!(writer, "{}", render_row(record, tz))?;
  }
  writer.flush()
}
