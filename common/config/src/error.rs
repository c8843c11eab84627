//! Error types for configuration loading.

use snafu::Snafu;
use toolcall_error::ErrorExt;
use toolcall_error::Location;
use toolcall_error::StatusCode;

/// Configuration error type.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum ConfigError {
    /// Reading or creating a configuration path failed.
    #[snafu(display("{message}"))]
    Io {
        message: String,
        source: std::io::Error,
        #[snafu(implicit)]
        location: Location,
    },

    /// Invalid JSON in a configuration file.
    #[snafu(display("Invalid JSON in {file}"))]
    JsonParse {
        file: String,
        source: serde_json::Error,
        #[snafu(implicit)]
        location: Location,
    },

    /// A configuration value is out of range.
    #[snafu(display("Invalid config value for {field}: {message}"))]
    InvalidValue {
        field: String,
        message: String,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for ConfigError {
    fn status_code(&self) -> StatusCode {
        match self {
            ConfigError::Io { .. } => StatusCode::ConfigFileError,
            ConfigError::JsonParse { .. } => StatusCode::ConfigFileError,
            ConfigError::InvalidValue { .. } => StatusCode::InvalidConfig,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
