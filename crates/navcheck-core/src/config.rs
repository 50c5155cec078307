//! Runtime configuration for a verification run
//!
//! Loaded from an optional TOML file; every field has a default so an empty
//! file (or no file at all) yields a working configuration. CLI flags
//! override loaded values.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::descriptor::BASE_URL;
use crate::error::{CheckError, Result};

/// Settings controlling browser launch and expectation waits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Root URL the scenarios navigate to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Run Chrome headless (default: true)
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Browser window width
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Browser window height
    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// Bound on every expectation wait, in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Interval between expectation polls, in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_base_url() -> String {
    BASE_URL.to_string()
}

fn default_headless() -> bool {
    true
}

fn default_window_width() -> u32 {
    1920
}

fn default_window_height() -> u32 {
    1080
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_poll_interval_ms() -> u64 {
    250
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            headless: default_headless(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            timeout_seconds: default_timeout_seconds(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl CheckConfig {
    /// Load configuration from a TOML file, or use defaults when the file
    /// does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)
                .map_err(|e| CheckError::Config(format!("Failed to parse config file: {}", e)))
        } else {
            Ok(Self::default())
        }
    }

    /// Bound on a single expectation wait
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Interval between expectation polls
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CheckConfig::default();
        assert_eq!(config.base_url, "https://playwright.dev/");
        assert!(config.headless);
        assert_eq!(config.window_width, 1920);
        assert_eq!(config.window_height, 1080);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.poll_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CheckConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.base_url, "https://playwright.dev/");
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_omitted_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navcheck.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "base_url = \"http://localhost:3000/\"").unwrap();
        writeln!(file, "timeout_seconds = 5").unwrap();

        let config = CheckConfig::load_or_default(&path).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000/");
        assert_eq!(config.timeout_seconds, 5);
        assert!(config.headless);
        assert_eq!(config.poll_interval_ms, 250);
    }

    #[test]
    fn test_invalid_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navcheck.toml");
        std::fs::write(&path, "timeout_seconds = \"soon\"").unwrap();

        let err = CheckConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, CheckError::Config(_)));
    }
}
