//! User settings: defaults, then the settings file, then environment.
//!
//! The settings file is JSON at `$XDG_CONFIG_HOME/migmap/settings.json`:
//!
//! ```json
//! { "base_url": "http://localhost:8000", "page_size": 25 }
//! ```

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::consts::{DEFAULT_DEBOUNCE, DEFAULT_PAGE_SIZE};
use crate::debounce::Debouncer;
use crate::paths::settings_path;

pub const BASE_URL_ENV: &str = "MIGMAP_BASE_URL";
pub const DATA_DIR_ENV: &str = "MIGMAP_DATA_DIR";
pub const PAGE_SIZE_ENV: &str = "MIGMAP_PAGE_SIZE";

#[derive(Debug, Error)]
pub enum SettingsError {
  #[error("failed to read settings file {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid settings file {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("invalid value '{value}' for {var}: expected a positive integer")]
  InvalidEnv { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
  /// Backend base URL for HTTP fetches.
  pub base_url: Option<String>,
  /// Directory of exported JSON collections, used when no URL is set.
  pub data_dir: Option<PathBuf>,
  pub page_size: NonZeroUsize,
  pub debounce_ms: u64,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      base_url: None,
      data_dir: None,
      page_size: DEFAULT_PAGE_SIZE,
      debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
    }
  }
}

impl Settings {
  /// Loads settings from the default location with environment overrides.
  pub fn load() -> Result<Self, SettingsError> {
    let settings = match settings_path() {
      Some(path) => Self::from_file(&path)?,
      None => Self::default(),
    };
    settings.with_env()
  }

  /// Reads a settings file; a missing file yields the defaults.
  pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
    let content = match std::fs::read_to_string(path) {
      Ok(content) => content,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        debug!(path = ?path, "no settings file, using defaults");
        return Ok(Self::default());
      }
      Err(source) => {
        return Err(SettingsError::Io {
          path: path.to_path_buf(),
          source,
        });
      }
    };

    serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Applies `MIGMAP_*` environment variables over these settings.
  pub fn with_env(mut self) -> Result<Self, SettingsError> {
    if let Some(url) = non_empty_var(BASE_URL_ENV) {
      self.base_url = Some(url);
    }
    if let Some(dir) = non_empty_var(DATA_DIR_ENV) {
      self.data_dir = Some(PathBuf::from(dir));
    }
    if let Some(size) = non_empty_var(PAGE_SIZE_ENV) {
      self.page_size = size.parse().map_err(|_| SettingsError::InvalidEnv {
        var: PAGE_SIZE_ENV,
        value: size,
      })?;
    }
    Ok(self)
  }

  pub fn debounce(&self) -> Duration {
    Duration::from_millis(self.debounce_ms)
  }

  /// A search debouncer using the configured window.
  pub fn debouncer<T>(&self) -> Debouncer<T> {
    Debouncer::new(self.debounce())
  }
}

fn non_empty_var(name: &str) -> Option<String> {
  std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;
  use tempfile::TempDir;

  #[test]
  fn missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::from_file(&temp.path().join("settings.json")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.page_size.get(), 10);
    assert_eq!(settings.debounce(), Duration::from_millis(500));
  }

  #[test]
  fn file_values_override_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.json");
    std::fs::write(&path, r#"{"base_url": "http://backend:8000", "page_size": 25}"#).unwrap();
    let settings = Settings::from_file(&path).unwrap();
    assert_eq!(settings.base_url.as_deref(), Some("http://backend:8000"));
    assert_eq!(settings.page_size.get(), 25);
    assert_eq!(settings.debounce_ms, 500);
  }

  #[test]
  fn zero_page_size_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.json");
    std::fs::write(&path, r#"{"page_size": 0}"#).unwrap();
    assert!(matches!(Settings::from_file(&path), Err(SettingsError::Parse { .. })));
  }

  #[test]
  fn unknown_keys_are_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.json");
    std::fs::write(&path, r#"{"pagesize": 5}"#).unwrap();
    assert!(matches!(Settings::from_file(&path), Err(SettingsError::Parse { .. })));
  }

  #[test]
  #[serial]
  fn environment_overrides_file() {
    temp_env::with_vars(
      [
        (BASE_URL_ENV, Some("http://env:9000")),
        (DATA_DIR_ENV, None),
        (PAGE_SIZE_ENV, Some("50")),
      ],
      || {
        let file = Settings {
          base_url: Some("http://file:8000".into()),
          ..Settings::default()
        };
        let settings = file.with_env().unwrap();
        assert_eq!(settings.base_url.as_deref(), Some("http://env:9000"));
        assert_eq!(settings.page_size.get(), 50);
      },
    );
  }

  #[test]
  #[serial]
  fn invalid_env_page_size_is_an_error() {
    temp_env::with_var(PAGE_SIZE_ENV, Some("0"), || {
      let err = Settings::default().with_env().unwrap_err();
      assert_eq!(err.to_string(), "invalid value '0' for MIGMAP_PAGE_SIZE: expected a positive integer");
    });
  }

  #[test]
  #[serial]
  #[cfg(not(windows))]
  fn load_reads_xdg_settings_file() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("migmap");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("settings.json"), r#"{"debounce_ms": 250}"#).unwrap();

    temp_env::with_vars(
      [
        ("XDG_CONFIG_HOME", Some(temp.path().to_str().unwrap())),
        (BASE_URL_ENV, None),
        (DATA_DIR_ENV, None),
        (PAGE_SIZE_ENV, None),
      ],
      || {
        let settings = Settings::load().unwrap();
        assert_eq!(settings.debounce(), Duration::from_millis(250));
        assert_eq!(settings.debouncer::<String>().window(), Duration::from_millis(250));
      },
    );
  }
}
