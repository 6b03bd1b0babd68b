//! Platform directories for migmap configuration.

use crate::consts::APP_NAME;
use std::path::PathBuf;

/// Returns the user's home directory
#[cfg(windows)]
pub fn home_dir() -> Option<PathBuf> {
  std::env::var("USERPROFILE").ok().map(PathBuf::from)
}

/// Returns the user's home directory
#[cfg(not(windows))]
pub fn home_dir() -> Option<PathBuf> {
  std::env::var("HOME").ok().map(PathBuf::from)
}

/// Returns the directory for configuration files for the application
#[cfg(windows)]
pub fn config_dir() -> Option<PathBuf> {
  std::env::var("APPDATA").ok().map(|p| PathBuf::from(p).join(APP_NAME))
}

/// Returns the directory for configuration files for the application
#[cfg(not(windows))]
pub fn config_dir() -> Option<PathBuf> {
  let config_home = std::env::var("XDG_CONFIG_HOME")
    .map(PathBuf::from)
    .ok()
    .or_else(|| home_dir().map(|h| h.join(".config")))?;
  Some(config_home.join(APP_NAME))
}

/// Path of the settings file inside [`config_dir`].
pub fn settings_path() -> Option<PathBuf> {
  config_dir().map(|d| d.join("settings.json"))
}

#[cfg(all(test, not(windows)))]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn xdg_config_home_wins() {
    temp_env::with_vars(
      [("XDG_CONFIG_HOME", Some("/tmp/xdg")), ("HOME", Some("/home/someone"))],
      || {
        assert_eq!(config_dir(), Some(PathBuf::from("/tmp/xdg/migmap")));
        assert_eq!(settings_path(), Some(PathBuf::from("/tmp/xdg/migmap/settings.json")));
      },
    );
  }

  #[test]
  #[serial]
  fn falls_back_to_home_dot_config() {
    temp_env::with_vars(
      [("XDG_CONFIG_HOME", None::<&str>), ("HOME", Some("/home/someone"))],
      || {
        assert_eq!(config_dir(), Some(PathBuf::from("/home/someone/.config/migmap")));
      },
    );
  }
}
