//! Error types for wardview

use thiserror::Error;

use crate::view::View;

pub type Result<T> = std::result::Result<T, WardError>;

#[derive(Error, Debug)]
pub enum WardError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Routing error: {0}")]
    Routing(#[from] RouterError),

    #[error("Scheduler error: {0}")]
    Scheduler(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl WardError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WardError::InvalidInput(_) => 3,
            WardError::Config(_) => 2,
            WardError::Routing(_) => 1,
            WardError::Scheduler(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Rejected direct transitions
///
/// Topic-driven transitions are defined from every view, so only the direct
/// calls (select patient, view specialists) can produce this.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("'{trigger}' is not available from the {from} view")]
    InvalidTransition { from: View, trigger: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = WardError::InvalidInput("empty patient id".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_config_error() {
        let error = WardError::Config(ConfigError::MissingField("live".to_string()));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_routing_error() {
        let error = WardError::Routing(RouterError::InvalidTransition {
            from: View::Beds,
            trigger: "select patient".to_string(),
        });
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_invalid_transition() {
        let error = RouterError::InvalidTransition {
            from: View::Dashboard,
            trigger: "view specialists".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "'view specialists' is not available from the dashboard view"
        );
    }

    #[test]
    fn test_error_message_formatting_invalid_value() {
        let error = ConfigError::InvalidValue {
            field: "live.census_interval".to_string(),
            message: "must be greater than zero".to_string(),
        };
        let error = WardError::from(error);
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid value for live.census_interval: must be greater than zero"
        );
    }

    #[test]
    fn test_config_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error = WardError::from(ConfigError::from(io_error));
        assert!(matches!(error, WardError::Config(ConfigError::ReadError(_))));
    }
}
