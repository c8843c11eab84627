//! Tool output governance configuration.
//!
//! Defines when oversized tool output is moved out of the transcript.

use serde::Deserialize;
use serde::Serialize;

/// Default output size (bytes) above which successful text output is truncated.
pub const DEFAULT_TRUNCATE_OUTPUT_THRESHOLD: i32 = 400_000;

/// Default number of lines kept as a preview of truncated output.
pub const DEFAULT_TRUNCATE_OUTPUT_LINES: i32 = 1_000;

/// Tool output configuration.
///
/// A threshold or line count of zero or less disables truncation entirely.
///
/// # Environment Variables
///
/// - `TOOLCALL_TRUNCATE_OUTPUT_THRESHOLD`: Truncation threshold in bytes
/// - `TOOLCALL_TRUNCATE_OUTPUT_LINES`: Preview line budget
/// - `TOOLCALL_ENABLE_OUTPUT_TRUNCATION`: Master switch
///
/// # Example
///
/// ```json
/// {
///   "tool": {
///     "truncate_output_threshold": 100000,
///     "truncate_output_lines": 200
///   }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Enable output truncation (default: true).
    #[serde(default = "default_true")]
    pub enable_output_truncation: bool,

    /// Output size in bytes above which successful text output is truncated.
    #[serde(default = "default_truncate_output_threshold")]
    pub truncate_output_threshold: i32,

    /// Maximum number of lines kept as a preview of truncated output.
    #[serde(default = "default_truncate_output_lines")]
    pub truncate_output_lines: i32,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            enable_output_truncation: true,
            truncate_output_threshold: DEFAULT_TRUNCATE_OUTPUT_THRESHOLD,
            truncate_output_lines: DEFAULT_TRUNCATE_OUTPUT_LINES,
        }
    }
}

impl ToolConfig {
    /// Returns `(threshold, lines)` when truncation is active.
    pub fn truncation_limits(&self) -> Option<(usize, usize)> {
        if !self.enable_output_truncation
            || self.truncate_output_threshold <= 0
            || self.truncate_output_lines <= 0
        {
            return None;
        }
        Some((
            self.truncate_output_threshold as usize,
            self.truncate_output_lines as usize,
        ))
    }
}

fn default_truncate_output_threshold() -> i32 {
    DEFAULT_TRUNCATE_OUTPUT_THRESHOLD
}

fn default_truncate_output_lines() -> i32 {
    DEFAULT_TRUNCATE_OUTPUT_LINES
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "tool_config.test.rs"]
mod tests;
