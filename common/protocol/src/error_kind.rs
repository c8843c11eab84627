//! Classification kinds attached to failed tool calls.

use serde::Deserialize;
use serde::Serialize;
use strum::AsRefStr;
use strum::Display;
use strum::EnumIter;
use toolcall_error::StatusCode;

/// Classification kind of a failed tool call.
///
/// Every kind except [`ToolErrorKind::Unhandled`] is raised deliberately by an
/// invocation that knows what went wrong. `Unhandled` is the fallback for any
/// fault that did not carry a kind of its own.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ToolErrorKind {
    /// Arguments failed validation.
    InvalidToolParams,
    /// No tool with the requested name exists.
    ToolNotRegistered,
    /// The user or the permission system refused the call.
    PermissionDenied,
    /// A hook or policy blocked the call.
    PolicyViolation,
    /// A file the tool needed does not exist.
    FileNotFound,
    /// A path argument escaped the workspace.
    PathNotInWorkspace,
    /// The tool ran and reported failure.
    ExecutionFailed,
    /// A spawned shell process failed.
    ShellExecuteError,
    /// A remote MCP tool reported failure.
    McpToolError,
    /// Anything that was not classified at the source.
    Unhandled,
}

impl ToolErrorKind {
    /// Whether this kind was assigned by the failing tool itself.
    pub fn is_structured(&self) -> bool {
        !matches!(self, ToolErrorKind::Unhandled)
    }

    /// Status code used when this kind crosses a crate boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ToolErrorKind::InvalidToolParams => StatusCode::InvalidArguments,
            ToolErrorKind::ToolNotRegistered => StatusCode::ToolNotFound,
            ToolErrorKind::PermissionDenied => StatusCode::PermissionDenied,
            ToolErrorKind::PolicyViolation => StatusCode::PolicyViolation,
            ToolErrorKind::FileNotFound => StatusCode::FileNotFound,
            ToolErrorKind::PathNotInWorkspace => StatusCode::PathOutsideWorkspace,
            ToolErrorKind::ExecutionFailed => StatusCode::ToolExecutionFailed,
            ToolErrorKind::ShellExecuteError => StatusCode::ShellExecutionFailed,
            ToolErrorKind::McpToolError => StatusCode::McpToolFailed,
            ToolErrorKind::Unhandled => StatusCode::Unknown,
        }
    }
}

#[cfg(test)]
#[path = "error_kind.test.rs"]
mod tests;
