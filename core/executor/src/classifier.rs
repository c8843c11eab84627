//! Normalizes faults into `{message, display, kind}`.
//!
//! `message` is the raw text for the machine-readable error channel;
//! `display` is what the user sees. They are never swapped.

use std::any::Any;

use toolcall_protocol::ToolErrorKind;
use toolcall_protocol::ToolResultError;
use toolcall_tools_api::ToolError;

/// A classified failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedError {
    pub message: String,
    pub display: String,
    pub kind: ToolErrorKind,
}

impl ClassifiedError {
    /// A fault with no friendlier text than its own message.
    pub fn unhandled(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            display: message.clone(),
            message,
            kind: ToolErrorKind::Unhandled,
        }
    }
}

/// Classify a fault raised by the invocation layer.
pub fn classify_fault(fault: &ToolError) -> ClassifiedError {
    match fault.as_structured() {
        Some((message, display, kind)) => ClassifiedError {
            message: message.to_string(),
            display: display.to_string(),
            kind,
        },
        None => ClassifiedError::unhandled(fault.to_string()),
    }
}

/// Classify the error descriptor of a settled result.
///
/// The display comes from the result's own display text, falling back to
/// the error message when the result has none.
pub fn classify_result_error(
    error: &ToolResultError,
    return_display: Option<&str>,
) -> ClassifiedError {
    ClassifiedError {
        message: error.message.clone(),
        display: return_display.unwrap_or(&error.message).to_string(),
        kind: error.kind,
    }
}

/// Classify a panic caught while running the invocation.
pub(crate) fn classify_panic(payload: Box<dyn Any + Send>) -> ClassifiedError {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Tool invocation panicked".to_string()
    };
    ClassifiedError::unhandled(message)
}

#[cfg(test)]
#[path = "classifier.test.rs"]
mod tests;
