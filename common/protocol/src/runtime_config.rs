//! Immutable settings threaded through a tool call.

use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::ShellExecutionConfig;
use crate::ToolConfig;

/// Runtime settings for executing tool calls.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub tool: ToolConfig,
    #[serde(default)]
    pub shell: ShellExecutionConfig,
    /// Model identifier used when converting results for the transcript.
    #[serde(default)]
    pub model: String,
    /// Directory for saved tool output.
    #[serde(default)]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub session_id: String,
}

#[cfg(test)]
#[path = "runtime_config.test.rs"]
mod tests;
