//! # Jira API Endpoints
//!
//! Endpoint implementations grouped by resource: agile boards and sprints,
//! sprint ticket search, and issue changelogs.

pub mod boards;
pub mod changelog;
pub mod search;
