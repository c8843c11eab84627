//! Terminal payloads for the three outcomes of a call.

use std::path::PathBuf;

use toolcall_protocol::ResponsePart;
use toolcall_protocol::ToolCallResponse;
use toolcall_protocol::ToolResultContent;
use toolcall_tools_api::CallInfo;
use toolcall_tools_api::CompletedCall;
use toolcall_tools_api::TranscriptConverter;

use crate::classifier::ClassifiedError;

/// Prefix of the error text reported for cancelled calls.
pub const CANCELLED_PREFIX: &str = "[Operation Cancelled] ";

/// Reason reported when the caller's cancellation token fired.
pub const USER_CANCELLED_REASON: &str = "User cancelled tool execution.";

/// Build the payload of a cancelled call.
///
/// Cancellation is not an error: the call carries no error message or kind,
/// only the function-response error text.
pub fn build_cancelled(info: CallInfo, reason: &str) -> CompletedCall {
    let text = format!("{CANCELLED_PREFIX}{reason}");
    let response = ToolCallResponse {
        call_id: info.request.call_id.clone(),
        response_parts: vec![ResponsePart::error_response(
            info.request.call_id.as_str(),
            info.request.name.as_str(),
            &text,
        )],
        result_display: None,
        error: None,
        error_kind: None,
        output_file: None,
        content_length: Some(text.len()),
    };
    complete(info, response)
}

/// Build the payload of a successful call.
pub fn build_success(
    info: CallInfo,
    content: &ToolResultContent,
    return_display: Option<String>,
    output_file: Option<PathBuf>,
    converter: &dyn TranscriptConverter,
    model: &str,
) -> CompletedCall {
    let response_parts = converter.convert(
        &info.request.name,
        &info.request.call_id,
        content,
        model,
    );
    let response = ToolCallResponse {
        call_id: info.request.call_id.clone(),
        response_parts,
        result_display: return_display,
        error: None,
        error_kind: None,
        output_file,
        content_length: content.as_text().map(str::len),
    };
    complete(info, response)
}

/// Build the payload of a failed call.
///
/// The raw message goes to the transcript; display and kind are side metadata.
pub fn build_error(info: CallInfo, error: ClassifiedError) -> CompletedCall {
    let ClassifiedError {
        message,
        display,
        kind,
    } = error;
    let response = ToolCallResponse {
        call_id: info.request.call_id.clone(),
        response_parts: vec![ResponsePart::error_response(
            info.request.call_id.as_str(),
            info.request.name.as_str(),
            &message,
        )],
        result_display: Some(display),
        content_length: Some(message.len()),
        error: Some(message),
        error_kind: Some(kind),
        output_file: None,
    };
    complete(info, response)
}

fn complete(info: CallInfo, response: ToolCallResponse) -> CompletedCall {
    CompletedCall {
        duration: info.elapsed(),
        info,
        response,
    }
}

#[cfg(test)]
#[path = "response.test.rs"]
mod tests;
