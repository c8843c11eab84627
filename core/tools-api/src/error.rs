//! Faults raised by tool invocations.

use snafu::Snafu;
use toolcall_error::BoxError;
use toolcall_error::ErrorExt;
use toolcall_error::Location;
use toolcall_error::StatusCode;
use toolcall_protocol::ToolErrorKind;

/// Tool invocation errors.
///
/// Only [`ToolError::Structured`] carries a user-facing display and a
/// classification kind. Every other variant is treated as unhandled.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum ToolError {
    /// Deliberately raised fault with separate developer and user messages.
    #[snafu(display("{message}"))]
    Structured {
        message: String,
        display: String,
        kind: ToolErrorKind,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("IO error: {source}"))]
    Io {
        source: std::io::Error,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("JSON error: {source}"))]
    Json {
        source: serde_json::Error,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("{message}"))]
    Internal {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    /// Arbitrary error from a tool backend.
    #[snafu(display("{source}"))]
    Other {
        source: BoxError,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ToolError {
    /// Build a structured fault.
    pub fn structured(
        message: impl Into<String>,
        display: impl Into<String>,
        kind: ToolErrorKind,
    ) -> Self {
        tool_error::StructuredSnafu {
            message,
            display,
            kind,
        }
        .build()
    }

    pub fn internal(message: impl Into<String>) -> Self {
        tool_error::InternalSnafu { message }.build()
    }

    /// Wrap any backend error.
    pub fn other(source: impl Into<BoxError>) -> Self {
        ToolError::Other {
            source: source.into(),
            location: Location::default(),
        }
    }

    /// Returns `(message, display, kind)` for structured faults.
    pub fn as_structured(&self) -> Option<(&str, &str, ToolErrorKind)> {
        match self {
            ToolError::Structured {
                message,
                display,
                kind,
                ..
            } => Some((message, display, *kind)),
            _ => None,
        }
    }
}

impl ErrorExt for ToolError {
    fn status_code(&self) -> StatusCode {
        match self {
            ToolError::Structured { kind, .. } => kind.status_code(),
            ToolError::Io { .. } => StatusCode::IoError,
            ToolError::Json { .. } => StatusCode::InvalidJson,
            ToolError::Internal { .. } => StatusCode::Internal,
            ToolError::Other { .. } => StatusCode::ToolExecutionFailed,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl From<std::io::Error> for ToolError {
    fn from(source: std::io::Error) -> Self {
        ToolError::Io {
            source,
            location: Location::default(),
        }
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(source: serde_json::Error) -> Self {
        ToolError::Json {
            source,
            location: Location::default(),
        }
    }
}

/// Result type for tool operations.
pub type Result<T> = std::result::Result<T, ToolError>;

#[cfg(test)]
#[path = "error.test.rs"]
mod tests;
