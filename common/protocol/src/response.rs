//! Transcript-facing responses for finished tool calls.

use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::ToolErrorKind;

/// Binary payload embedded in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineData {
    pub mime_type: String,
    /// Base64 encoded bytes.
    pub data: String,
}

/// The function-response record the model sees for a tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    pub id: String,
    pub name: String,
    pub response: Value,
    /// Media embedded directly in the function response.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<InlineData>,
}

/// One part of the transcript message produced for a tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponsePart {
    FunctionResponse(FunctionResponse),
    InlineData(InlineData),
    Text { text: String },
}

impl ResponsePart {
    /// Build a function-response part whose payload is `{"error": message}`.
    pub fn error_response(
        call_id: impl Into<String>,
        name: impl Into<String>,
        message: &str,
    ) -> Self {
        ResponsePart::FunctionResponse(FunctionResponse {
            id: call_id.into(),
            name: name.into(),
            response: serde_json::json!({ "error": message }),
            parts: Vec::new(),
        })
    }

    pub fn as_function_response(&self) -> Option<&FunctionResponse> {
        match self {
            ResponsePart::FunctionResponse(response) => Some(response),
            _ => None,
        }
    }
}

/// Terminal payload for a tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallResponse {
    pub call_id: String,
    /// Parts appended to the model transcript.
    pub response_parts: Vec<ResponsePart>,
    /// User-facing text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_display: Option<String>,
    /// Raw, machine-readable error message. Only set for failed calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Classification kind. Only set for failed calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ToolErrorKind>,
    /// Where the full output was saved when it was truncated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,
    /// Length in bytes of the content handed to the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_length: Option<usize>,
}

impl ToolCallResponse {
    /// The `error` payload of the first function-response part, if any.
    pub fn function_error(&self) -> Option<&str> {
        self.response_parts
            .iter()
            .filter_map(ResponsePart::as_function_response)
            .find_map(|r| r.response.get("error").and_then(Value::as_str))
    }
}

#[cfg(test)]
#[path = "response.test.rs"]
mod tests;
