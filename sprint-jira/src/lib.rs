//! # Jira API Client
//!
//! Read-only Jira REST API integration for the sprint report: credential
//! checks, paged listing of agile boards and sprints, sprint ticket search,
//! and per-ticket changelog retrieval. Every collection endpoint goes through
//! one paginated fetcher.

pub mod auth;
mod client;
mod consts;
mod endpoints;
mod error;
pub mod models;
mod pagination;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
pub use error::JiraError;
// Re-export models
pub use models::{ChangelogEntry, ChangelogItem, JiraAuth, JiraIssue, NamedItem, SearchPage, ValuesPage};
