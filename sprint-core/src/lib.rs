//! # Sprint Report Core Library
//!
//! Shared building blocks for the sprint report: the persisted configuration,
//! ticket ordering, the changelog reducer that derives in-progress and done
//! timestamps, the tab-separated report renderer, and the interactive
//! selection prompt. Nothing in this crate talks to the network.

pub mod config;
pub mod consts;
pub mod creds;
pub mod history;
pub mod output;
pub mod prompts;
pub mod report;
pub mod select;
pub mod ticket;
pub mod url;

// Re-export main types for the client and CLI crates
pub use config::{
  BoardSettings, ConfigDirs, ConfigError, HttpSettings, ReportConfig, WorkflowConfig, get_config_dirs, load_config,
  save_config,
};
pub use creds::Credentials;
pub use history::{ChangelogEvent, StatusTimes, parse_jira_timestamp};
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
pub use report::{REPORT_HEADER, render_row, write_report};
pub use select::{SelectionError, choose, choose_from_terminal, sorted_choices};
pub use ticket::{TicketKeyError, TicketRecord, TicketSummary, sort_by_ticket_number, ticket_number};
