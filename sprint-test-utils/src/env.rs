//! Environment variable management for testing
//!
//! This module provides RAII guards that override environment variables for
//! the duration of a test and restore the previous values on drop.

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

/// Overrides a single environment variable and restores it when dropped
pub struct EnvVarGuard {
  name: String,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Remember the current value of `name` so it can be restored later
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      original: env::var(name).ok(),
    }
  }

  /// Set the variable for the rest of the guard's lifetime
  pub fn set(&self, value: &str) {
    // SAFETY: test-only helper; callers keep each variable's use within one test.
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  /// Unset the variable for the rest of the guard's lifetime
  pub fn remove(&self) {
    // SAFETY: see `set`.
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      // SAFETY: see `set`.
      Some(val) => unsafe {
        env::set_var(&self.name, val);
      },
      // SAFETY: see `set`.
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}

/// A test environment that points `XDG_CONFIG_HOME` at a per-test
/// temporary directory
pub struct EnvTestGuard {
  /// The temporary directory holding the XDG config home
  pub temp_dir: TempDir,
  _config_home: EnvVarGuard,
}

impl Default for EnvTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl EnvTestGuard {
  pub const XDG_CONFIG_HOME: &'static str = "XDG_CONFIG_HOME";

  /// Create a new test environment with an overridden config home
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let config_dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_dir).expect("Failed to create XDG directory");

    let config_home = EnvVarGuard::new(Self::XDG_CONFIG_HOME);
    config_home.set(&config_dir.to_string_lossy());

    Self {
      temp_dir,
      _config_home: config_home,
    }
  }

  /// Get the path to the XDG config directory
  pub fn config_dir(&self) -> PathBuf {
    self.temp_dir.path().join("config")
  }
}
