//! Constants for the sprint-jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Jira REST API v3 root.
pub const API_ROOT: &str = "/rest/api/3";

/// Jira Software agile API root.
pub const AGILE_ROOT: &str = "/rest/agile/1.0";

/// Paging query parameters.
pub const QUERY_MAX_RESULTS: &str = "maxResults";
pub const QUERY_START_AT: &str = "startAt";

/// JQL query parameter for issue search.
pub const QUERY_JQL: &str = "jql";
