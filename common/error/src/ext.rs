//! Extension trait shared by every error type in the workspace.

use std::any::Any;
use std::error::Error;
use std::fmt;

use crate::BoxError;
use crate::StatusCode;

/// Extension methods for errors that participate in [`StatusCode`]
/// classification.
pub trait ErrorExt: Error {
    /// Status code describing this error.
    fn status_code(&self) -> StatusCode {
        StatusCode::Unknown
    }

    /// Whether retrying the failed operation may succeed.
    fn is_retryable(&self) -> bool {
        self.status_code().is_retryable()
    }

    /// Message that is safe to show to an end user.
    ///
    /// Internal and unknown errors only expose their numeric code.
    fn output_msg(&self) -> String {
        match self.status_code() {
            code @ (StatusCode::Unknown | StatusCode::Internal) => {
                format!("Internal error: {}", code as i32)
            }
            _ => self.to_string(),
        }
    }

    /// Access the concrete error for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// Error carrying only a message and a status code.
#[derive(Debug, Clone)]
pub struct PlainError {
    msg: String,
    status_code: StatusCode,
}

impl PlainError {
    pub fn new(msg: impl Into<String>, status_code: StatusCode) -> Self {
        Self {
            msg: msg.into(),
            status_code,
        }
    }
}

impl fmt::Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl Error for PlainError {}

impl ErrorExt for PlainError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Foreign error wrapped together with a status code.
#[derive(Debug)]
pub struct BoxedError {
    inner: BoxError,
    status_code: StatusCode,
}

impl BoxedError {
    /// The wrapped error.
    pub fn inner(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.inner.as_ref()
    }
}

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Error for BoxedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl ErrorExt for BoxedError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Wrap any error with an explicit status code.
pub fn boxed<E>(err: E, status_code: StatusCode) -> BoxedError
where
    E: Error + Send + Sync + 'static,
{
    BoxedError {
        inner: Box::new(err),
        status_code,
    }
}

#[cfg(test)]
#[path = "ext.test.rs"]
mod tests;
