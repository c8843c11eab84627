//! Conversion of tool results into transcript parts.

use serde_json::Value;
use serde_json::json;
use toolcall_protocol::FunctionResponse;
use toolcall_protocol::InlineData;
use toolcall_protocol::ResponsePart;
use toolcall_protocol::ToolResultContent;

/// Model identifier prefixes whose function responses may embed media.
pub const DEFAULT_MULTIMODAL_PREFIXES: &[&str] = &["gemini-3"];

/// Converts settled content into transcript parts for a model.
pub trait TranscriptConverter: Send + Sync {
    fn convert(
        &self,
        tool_name: &str,
        call_id: &str,
        content: &ToolResultContent,
        model: &str,
    ) -> Vec<ResponsePart>;
}

/// Produces one function response per call, plus separate media parts for
/// models that cannot take media inside a function response.
#[derive(Debug, Clone)]
pub struct FunctionResponseConverter {
    multimodal_prefixes: Vec<String>,
}

impl Default for FunctionResponseConverter {
    fn default() -> Self {
        Self::new(DEFAULT_MULTIMODAL_PREFIXES.iter().map(ToString::to_string))
    }
}

impl FunctionResponseConverter {
    pub fn new(multimodal_prefixes: impl IntoIterator<Item = String>) -> Self {
        Self {
            multimodal_prefixes: multimodal_prefixes.into_iter().collect(),
        }
    }

    fn supports_multimodal(&self, model: &str) -> bool {
        self.multimodal_prefixes
            .iter()
            .any(|prefix| model.starts_with(prefix.as_str()))
    }
}

impl TranscriptConverter for FunctionResponseConverter {
    fn convert(
        &self,
        tool_name: &str,
        call_id: &str,
        content: &ToolResultContent,
        model: &str,
    ) -> Vec<ResponsePart> {
        let function_response = |response: Value, parts: Vec<InlineData>| {
            ResponsePart::FunctionResponse(FunctionResponse {
                id: call_id.to_string(),
                name: tool_name.to_string(),
                response,
                parts,
            })
        };

        match content {
            ToolResultContent::Text { text } => {
                vec![function_response(json!({ "output": text }), Vec::new())]
            }
            ToolResultContent::Structured { value } => {
                vec![function_response(json!({ "output": value }), Vec::new())]
            }
            ToolResultContent::Media { mime_type, data } => {
                let inline = InlineData {
                    mime_type: mime_type.clone(),
                    data: data.clone(),
                };
                let summary = format!("Binary content provided ({mime_type}).");
                if self.supports_multimodal(model) {
                    vec![function_response(json!({ "output": summary }), vec![inline])]
                } else {
                    vec![
                        function_response(json!({ "output": summary }), Vec::new()),
                        ResponsePart::InlineData(inline),
                    ]
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "transcript.test.rs"]
mod tests;
