//! Temporary configuration files for testing

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A configuration file written into its own temporary directory, removed
/// when the guard is dropped
pub struct ConfigFileGuard {
  temp_dir: TempDir,
  path: PathBuf,
}

impl ConfigFileGuard {
  /// File name used for the configuration file
  pub const FILE_NAME: &'static str = "config.toml";

  /// Write `content` to a fresh configuration file
  pub fn new(content: &str) -> Self {
    let guard = Self::empty();
    fs::write(&guard.path, content).expect("Failed to write test config file");
    guard
  }

  /// Reserve a configuration path without creating the file
  pub fn empty() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(Self::FILE_NAME);
    Self { temp_dir, path }
  }

  /// Write a minimal valid configuration pointing at `host`
  pub fn with_host(host: &str, board_id: u64) -> Self {
    Self::new(&format!(
      r#"[credentials]
username = "test_user"
api_token = "test_token"

[board]
board_id = {board_id}

[http]
host = "{host}"
"#
    ))
  }

  /// Get the path to the configuration file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Get the path to the temporary directory holding the file
  pub fn dir(&self) -> &Path {
    self.temp_dir.path()
  }
}
