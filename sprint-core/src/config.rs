//! # Configuration Management
//!
//! Handles the sprint-report configuration file: where it lives (XDG base
//! directories via `directories`), what it holds, and how it is read and
//! written. Each operation receives only the section it needs, so the file is
//! split into credentials, board, HTTP and workflow sections.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
  CONFIG_FILE_NAME, DEFAULT_ACTUAL_POINTS_FIELD, DEFAULT_DONE_STATUS_ID, DEFAULT_ESTIMATED_POINTS_FIELD,
  DEFAULT_IN_PROGRESS_STATUS_ID, DEFAULT_JIRA_HOST, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS,
};
use crate::creds::Credentials;

/// Header written above the serialized settings.
const CONFIG_HEADER: &str = "# sprint-report configuration.\n\
# Edit this file to change settings, or delete it to run the setup prompts again.\n\n";

/// Errors raised while reading or writing the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Configuration file {} is a directory", .0.display())]
  IsDirectory(PathBuf),
  #[error("Failed to read configuration file {}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("Failed to parse configuration file {}", .path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },
  #[error("Configuration file {} sets http.timeout_secs to 0; use a positive number of seconds", .0.display())]
  ZeroTimeout(PathBuf),
  #[error("Failed to write configuration file {}", .path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("Failed to serialize configuration")]
  Serialize(#[from] toml::ser::Error),
}

/// Represents the configuration directories for sprint-report
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance
  pub fn new() -> Result<Self> {
    let proj_dirs =
      ProjectDirs::from("org", "kbase", "sprint-report").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Get the path to the configuration file
  pub fn config_path(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE_NAME)
  }
}

/// Get the configuration directories
pub fn get_config_dirs() -> Result<ConfigDirs> {
  ConfigDirs::new()
}

/// The complete persisted configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
  pub credentials: Credentials,
  pub board: BoardSettings,
  #[serde(default)]
  pub http: HttpSettings,
  #[serde(default)]
  pub workflow: WorkflowConfig,
}

/// The agile board whose sprints are offered for selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSettings {
  pub board_id: u64,
}

/// Connection settings for the Jira REST API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
  /// Jira site, e.g. `https://company.atlassian.net`. `$JIRA_HOST` wins over
  /// this value.
  pub host: String,
  pub timeout_secs: u64,
  pub page_size: u32,
}

impl Default for HttpSettings {
  fn default() -> Self {
    Self {
      host: DEFAULT_JIRA_HOST.to_string(),
      timeout_secs: DEFAULT_TIMEOUT_SECS,
      page_size: DEFAULT_PAGE_SIZE,
    }
  }
}

impl HttpSettings {
  /// The base URL to talk to, after applying `$JIRA_HOST` and scheme
  /// defaults.
  pub fn base_url(&self) -> Result<String> {
    crate::url::resolve_jira_base_url(&self.host)
  }
}

/// Workflow status ids and story point fields of the tracked Jira project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
  pub in_progress_status_id: String,
  pub done_status_id: String,
  pub estimated_points_field: String,
  pub actual_points_field: String,
}

impl Default for WorkflowConfig {
  fn default() -> Self {
    Self {
      in_progress_status_id: DEFAULT_IN_PROGRESS_STATUS_ID.to_string(),
      done_status_id: DEFAULT_DONE_STATUS_ID.to_string(),
      estimated_points_field: DEFAULT_ESTIMATED_POINTS_FIELD.to_string(),
      actual_points_field: DEFAULT_ACTUAL_POINTS_FIELD.to_string(),
    }
  }
}

/// Fail if the configuration path is occupied by a directory.
pub fn ensure_not_directory(path: &Path) -> Result<(), ConfigError> {
  if path.is_dir() {
    return Err(ConfigError::IsDirectory(path.to_path_buf()));
  }
  Ok(())
}

/// Load the configuration file.
///
/// Returns `Ok(None)` when the file does not exist yet.
pub fn load_config(path: &Path) -> Result<Option<ReportConfig>, ConfigError> {
  ensure_not_directory(path)?;
  if !path.exists() {
    return Ok(None);
  }

  let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  let config: ReportConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
    path: path.to_path_buf(),
    source,
  })?;

  // A zero timeout would fail every request before it is sent
  if config.http.timeout_secs == 0 {
    return Err(ConfigError::ZeroTimeout(path.to_path_buf()));
  }

  Ok(Some(config))
}

/// Save the configuration file, creating its directory if needed.
///
/// The file holds an API token, so on Unix it is made readable by the owner
/// only.
pub fn save_config(path: &Path, config: &ReportConfig) -> Result<(), ConfigError> {
  ensure_not_directory(path)?;

  let write_err = |source: std::io::Error| ConfigError::Write {
    path: path.to_path_buf(),
    source,
  };

  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent).map_err(write_err)?;
  }

  let body = toml::to_string_pretty(config)?;
  fs::write(path, format!("{CONFIG_HEADER}{body}")).map_err(write_err)?;

  #[cfg(unix)]
  {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_err)?;
  }

  Ok(())
}
