//! URL helpers for the Jira host setting.
//!
//! The host may come from the config file or from `$JIRA_HOST`, and users
//! commonly omit the scheme, so both sources go through [`ensure_url_scheme`].

use anyhow::Result;
use url::{Position, Url};

use crate::consts::ENV_JIRA_HOST;

/// Resolve the Jira base URL, preferring `$JIRA_HOST` over the configured
/// host.
///
/// If the host doesn't include a scheme (http:// or https://), assumes
/// https://.
pub fn resolve_jira_base_url(configured_host: &str) -> Result<String> {
  match std::env::var(ENV_JIRA_HOST) {
    Ok(host) if !host.trim().is_empty() => ensure_url_scheme(&host),
    _ => ensure_url_scheme(configured_host),
  }
}

/// Ensure a URL has a proper scheme (http:// or https://).
///
/// If the input doesn't include a scheme, assumes https://. A bare trailing
/// slash is dropped so endpoint paths can be appended directly.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Host cannot be empty"));
  }

  let candidate = if trimmed.contains("://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let url = Url::parse(&candidate).map_err(|e| anyhow::anyhow!("Failed to parse Jira host '{input}': {e}"))?;
  if url.host().is_none() {
    return Err(anyhow::anyhow!("Jira host '{input}' has no host name"));
  }

  Ok(normalize_url(&url))
}

/// Render a URL without a trailing slash on the path.
fn normalize_url(url: &Url) -> String {
  let mut result = String::new();
  result.push_str(&url[..Position::BeforePath]);
  result.push_str(url.path().trim_end_matches('/'));
  result
}
