//! Raw results returned by tool invocations.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::ToolErrorKind;

/// Content of a tool result destined for the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolResultContent {
    /// Text content.
    Text { text: String },
    /// Structured content (JSON).
    Structured { value: Value },
    /// Binary content, base64 encoded.
    Media { mime_type: String, data: String },
}

impl Default for ToolResultContent {
    fn default() -> Self {
        ToolResultContent::Text {
            text: String::new(),
        }
    }
}

impl ToolResultContent {
    pub fn text(text: impl Into<String>) -> Self {
        ToolResultContent::Text { text: text.into() }
    }

    pub fn structured(value: Value) -> Self {
        ToolResultContent::Structured { value }
    }

    pub fn media(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        ToolResultContent::Media {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// The text, if this content is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ToolResultContent::Text { text } => Some(text),
            _ => None,
        }
    }
}

/// Error descriptor reported by an invocation that settled normally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResultError {
    /// Raw, developer-facing message.
    pub message: String,
    /// Classification kind.
    pub kind: ToolErrorKind,
}

/// Outcome of running an invocation.
///
/// The presence of `error` (not a returned `Err`) is what marks a settled
/// result as failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Content for the model transcript.
    pub llm_content: ToolResultContent,
    /// Text to show the user instead of the raw content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_display: Option<String>,
    /// Set when the tool reports failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolResultError>,
}

impl ToolResult {
    /// Create a successful text result.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            llm_content: ToolResultContent::text(content),
            return_display: None,
            error: None,
        }
    }

    /// Create a failed result.
    pub fn error(message: impl Into<String>, kind: ToolErrorKind) -> Self {
        let message = message.into();
        Self {
            llm_content: ToolResultContent::text(message.clone()),
            return_display: None,
            error: Some(ToolResultError { message, kind }),
        }
    }

    /// Set the user-facing display text.
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.return_display = Some(display.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
#[path = "result.test.rs"]
mod tests;
