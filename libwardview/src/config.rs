//! Configuration management for wardview
//!
//! Every section is optional; missing keys take their defaults.
//!
//! ```toml
//! [live]
//! enabled = true
//! census_interval = "8s"
//! availability_interval = "8s"
//! pulse_interval = "2s"
//!
//! [notifications]
//! initial_count = 1
//!
//! [ui]
//! tick_rate_ms = 100
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};
use crate::notifications::DEFAULT_INITIAL_COUNT;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub live: LiveConfig,
    pub notifications: NotificationConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveConfig {
    pub enabled: bool,
    pub census_interval: String,
    pub availability_interval: String,
    pub pulse_interval: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub initial_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_rate_ms: u64,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            census_interval: "8s".to_string(),
            availability_interval: "8s".to_string(),
            pulse_interval: "2s".to_string(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            initial_count: DEFAULT_INITIAL_COUNT,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 100 }
    }
}

impl Config {
    /// Load from the default location, or use defaults if no file exists
    pub fn load_or_default() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject intervals that do not parse or are zero
    pub fn validate(&self) -> Result<()> {
        self.live.census_period()?;
        self.live.availability_period()?;
        self.live.pulse_period()?;
        if self.ui.tick_rate_ms == 0 {
            return Err(invalid("ui.tick_rate_ms", "must be greater than zero"));
        }
        Ok(())
    }
}

impl LiveConfig {
    pub fn census_period(&self) -> Result<Duration> {
        parse_interval("live.census_interval", &self.census_interval)
    }

    pub fn availability_period(&self) -> Result<Duration> {
        parse_interval("live.availability_interval", &self.availability_interval)
    }

    pub fn pulse_period(&self) -> Result<Duration> {
        parse_interval("live.pulse_interval", &self.pulse_interval)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

fn parse_interval(field: &str, value: &str) -> Result<Duration> {
    let period = humantime::parse_duration(value.trim())
        .map_err(|e| invalid(field, &format!("'{}' is not a duration ({})", value, e)))?;
    if period.is_zero() {
        return Err(invalid(field, "must be greater than zero"));
    }
    Ok(period)
}

fn invalid(field: &str, message: &str) -> crate::error::WardError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
    .into()
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("WARDVIEW_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("wardview").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WardError;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.live.enabled);
        assert_eq!(config.live.census_period().unwrap(), Duration::from_secs(8));
        assert_eq!(config.live.pulse_period().unwrap(), Duration::from_secs(2));
        assert_eq!(config.notifications.initial_count, 1);
        assert_eq!(config.ui.tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("[live]\ncensus_interval = \"15s\"\n");
        let config = Config::load_from_path(file.path()).unwrap();

        assert_eq!(config.live.census_period().unwrap(), Duration::from_secs(15));
        assert_eq!(config.live.availability_period().unwrap(), Duration::from_secs(8));
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let file = write_config("[live]\npulse_interval = \"0s\"\n");
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(
            err,
            WardError::Config(ConfigError::InvalidValue { ref field, .. }) if field == "live.pulse_interval"
        ));
    }

    #[test]
    fn test_garbage_interval_rejected() {
        let file = write_config("[live]\ncensus_interval = \"soon\"\n");
        assert!(Config::load_from_path(file.path()).is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let file = write_config("[live\nenabled = ");
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, WardError::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load_from_path(Path::new("/nonexistent/wardview.toml")).unwrap_err();
        assert!(matches!(err, WardError::Config(ConfigError::ReadError(_))));
    }

    #[test]
    #[serial]
    fn test_config_path_from_env() {
        std::env::set_var("WARDVIEW_CONFIG", "/tmp/wardview-test.toml");
        let path = resolve_config_path().unwrap();
        std::env::remove_var("WARDVIEW_CONFIG");

        assert_eq!(path, PathBuf::from("/tmp/wardview-test.toml"));
    }

    #[test]
    #[serial]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("WARDVIEW_CONFIG", dir.path().join("missing.toml"));
        let config = Config::load_or_default();
        std::env::remove_var("WARDVIEW_CONFIG");

        assert_eq!(config.unwrap(), Config::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Config::default();
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("census_interval = \"8s\""));
    }
}
