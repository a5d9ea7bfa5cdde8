//! Centralized logging configuration for wardview binaries
//!
//! Provides consistent logging setup with support for:
//! - Text, JSON, and pretty-printed output
//! - Environment variable configuration
//! - Per-module log level filtering
//! - Writing to a file instead of stderr (the TUI owns the terminal)
//!
//! # Examples
//!
//! ```no_run
//! use libwardview::logging::{LoggingConfig, LogFormat};
//!
//! // Initialize with JSON format
//! let config = LoggingConfig::new(LogFormat::Json, "info".to_string(), false);
//! config.init().unwrap();
//!
//! // Or build it from the WARDVIEW_LOG_* variables
//! libwardview::logging::from_env().init().unwrap();
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, WardError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
    /// Append to this file instead of writing to stderr
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Create a new logging configuration
    ///
    /// # Arguments
    ///
    /// * `format` - Log output format (text, json, or pretty)
    /// * `level` - Minimum log level (error, warn, info, debug, trace)
    /// * `verbose` - If true, defaults to debug level
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
            file: None,
        }
    }

    /// Send output to `path` (appending) instead of stderr
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    fn filter(&self) -> EnvFilter {
        let fallback = if self.verbose { "debug" } else { self.level.as_str() };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    }

    fn writer(&self) -> Result<BoxMakeWriter> {
        match &self.file {
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        WardError::InvalidInput(format!(
                            "cannot open log file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                Ok(BoxMakeWriter::new(Mutex::new(file)))
            }
            None => Ok(BoxMakeWriter::new(std::io::stderr)),
        }
    }

    /// Initialize logging with the configured settings
    ///
    /// This should be called once at the start of your program.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened. A subscriber that
    /// is already installed is left in place.
    pub fn init(&self) -> Result<()> {
        let filter = self.filter();
        let writer = self.writer()?;
        let ansi = self.file.is_none();

        let installed = match self.format {
            LogFormat::Json => {
                // One JSON object per line
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .try_init()
            }
            LogFormat::Pretty => tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .try_init(),
            LogFormat::Text => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(false)
                .with_level(true)
                .try_init(),
        };

        if let Err(e) = installed {
            tracing::debug!("logging already initialized: {}", e);
        }
        Ok(())
    }
}

/// Build a configuration from the `WARDVIEW_LOG_*` variables
///
/// Falls back to text format with info level on stderr.
///
/// # Examples
///
/// ```bash
/// # JSON logs into a file while the dashboard runs
/// export WARDVIEW_LOG_FORMAT=json
/// export WARDVIEW_LOG_LEVEL=debug
/// export WARDVIEW_LOG_FILE=/tmp/wardview.log
/// ward-tui
/// ```
pub fn from_env() -> LoggingConfig {
    let format = std::env::var("WARDVIEW_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);

    let level = std::env::var("WARDVIEW_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let config = LoggingConfig::new(format, level, false);
    match std::env::var("WARDVIEW_LOG_FILE") {
        Ok(path) if !path.is_empty() => config.with_file(shellexpand::tilde(&path).to_string()),
        _ => config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);

        // Case insensitive
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("Json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_from_str_invalid() {
        let result = "invalid".parse::<LogFormat>();
        assert!(result
            .unwrap_err()
            .contains("Invalid log format: 'invalid'"));
    }

    #[test]
    fn test_log_format_display() {
        assert_eq!(LogFormat::Text.to_string(), "text");
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
    }

    #[test]
    fn test_logging_config_with_file() {
        let config = LoggingConfig::new(LogFormat::Json, "debug".to_string(), true)
            .with_file("/tmp/wardview.log");
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.verbose);
        assert_eq!(config.file, Some(PathBuf::from("/tmp/wardview.log")));
    }

    #[test]
    fn test_unwritable_log_file() {
        let config = LoggingConfig::new(LogFormat::Text, "info".to_string(), false)
            .with_file("/nonexistent/dir/wardview.log");
        assert!(config.init().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var("WARDVIEW_LOG_FORMAT", "pretty");
        std::env::set_var("WARDVIEW_LOG_LEVEL", "trace");
        std::env::set_var("WARDVIEW_LOG_FILE", "/tmp/ward.log");
        let config = from_env();
        std::env::remove_var("WARDVIEW_LOG_FORMAT");
        std::env::remove_var("WARDVIEW_LOG_LEVEL");
        std::env::remove_var("WARDVIEW_LOG_FILE");

        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.level, "trace");
        assert_eq!(config.file, Some(PathBuf::from("/tmp/ward.log")));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        std::env::remove_var("WARDVIEW_LOG_FORMAT");
        std::env::remove_var("WARDVIEW_LOG_LEVEL");
        std::env::remove_var("WARDVIEW_LOG_FILE");
        let config = from_env();

        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.level, "info");
        assert!(config.file.is_none());
    }
}
