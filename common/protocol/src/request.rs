//! Tool call requests.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// A request from the model to run one tool.
///
/// Immutable once created; the executor only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Unique identifier of this call.
    pub call_id: String,
    /// Name of the tool to run.
    pub name: String,
    /// Arguments supplied by the model.
    #[serde(default)]
    pub args: Value,
    /// Identifier of the prompt (turn) that produced this call.
    pub prompt_id: String,
}

impl ToolCallRequest {
    pub fn new(
        call_id: impl Into<String>,
        name: impl Into<String>,
        args: Value,
        prompt_id: impl Into<String>,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            name: name.into(),
            args,
            prompt_id: prompt_id.into(),
        }
    }
}
