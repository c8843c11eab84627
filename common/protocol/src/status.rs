//! Lifecycle status discriminant for a tool call.

use serde::Deserialize;
use serde::Serialize;
use strum::AsRefStr;
use strum::Display;

/// Explicit discriminant of the call lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ToolCallStatus {
    Pending,
    Executing,
    Success,
    Error,
    Cancelled,
}

impl ToolCallStatus {
    /// Whether this status is one of the three terminal outcomes.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ToolCallStatus::Success | ToolCallStatus::Error | ToolCallStatus::Cancelled
        )
    }
}

#[cfg(test)]
#[path = "status.test.rs"]
mod tests;
