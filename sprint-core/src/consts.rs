//! Core constants shared across sprint-report components.

/// Environment variable that overrides the configured Jira host.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Jira site used when neither the config file nor `$JIRA_HOST` names one.
pub const DEFAULT_JIRA_HOST: &str = "https://kbase-jira.atlassian.net";

/// Where users can create an API token for the credentials prompt.
pub const JIRA_API_TOKEN_URL: &str = "https://confluence.atlassian.com/cloud/api-tokens-938839638.html";

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Changelog field id carrying workflow status transitions.
pub const STATUS_FIELD_ID: &str = "status";

/// Workflow status id for "In Progress" on the team's board.
pub const DEFAULT_IN_PROGRESS_STATUS_ID: &str = "10685";

/// Workflow status id for "Done" on the team's board.
pub const DEFAULT_DONE_STATUS_ID: &str = "10686";

/// Custom field holding the estimated story points.
pub const DEFAULT_ESTIMATED_POINTS_FIELD: &str = "customfield_11127";

/// Custom field holding the actual story points.
pub const DEFAULT_ACTUAL_POINTS_FIELD: &str = "customfield_11164";

/// Requested page size. Jira caps this server-side, so pages are usually
/// smaller.
pub const DEFAULT_PAGE_SIZE: u32 = 10_000;

/// HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
