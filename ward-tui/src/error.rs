//! Error types for ward-tui
//!
//! Wraps controller errors and terminal/IO errors for unified handling in
//! the event loop.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Controller error (routing, configuration, scheduling)
    #[error("Dashboard error: {0}")]
    Dashboard(#[from] libwardview::WardError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Runtime could not be created
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;

impl TuiError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TuiError::Dashboard(e) => e.exit_code(),
            TuiError::Terminal(_) | TuiError::Runtime(_) => 1,
        }
    }
}

/// Exit code for an error that reached `main`
///
/// Looks through added context for a wardview or TUI error; anything else
/// exits with 1.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    if let Some(e) = error.downcast_ref::<libwardview::WardError>() {
        return e.exit_code();
    }
    if let Some(e) = error.downcast_ref::<TuiError>() {
        return e.exit_code();
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use libwardview::{ConfigError, WardError};

    #[test]
    fn test_config_error_exit_code_through_context() {
        let failed: std::result::Result<(), WardError> =
            Err(ConfigError::MissingField("config directory".to_string()).into());
        let error = failed.context("failed to load config").unwrap_err();

        assert_eq!(exit_code(&error), 2);
    }

    #[test]
    fn test_tui_error_exit_code() {
        let error = anyhow::Error::new(TuiError::Dashboard(WardError::InvalidInput(
            "patient id cannot be empty".to_string(),
        )));
        assert_eq!(exit_code(&error), 3);

        let error = anyhow::Error::new(TuiError::Runtime("no threads".to_string()));
        assert_eq!(exit_code(&error), 1);
    }

    #[test]
    fn test_other_errors_exit_with_one() {
        assert_eq!(exit_code(&anyhow::anyhow!("terminal gone")), 1);
    }
}
