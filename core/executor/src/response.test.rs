use super::*;
use pretty_assertions::assert_eq;
use std::time::Duration;
use std::time::Instant;
use toolcall_protocol::ToolCallRequest;
use toolcall_protocol::ToolErrorKind;
use toolcall_tools_api::FunctionResponseConverter;

fn info() -> CallInfo {
    CallInfo::new(ToolCallRequest::new(
        "call-1",
        "write_file",
        serde_json::json!({"path": "/tmp/a"}),
        "prompt-1",
    ))
}

#[test]
fn test_cancelled_payload() {
    let done = build_cancelled(info(), USER_CANCELLED_REASON);
    let expected = "[Operation Cancelled] User cancelled tool execution.";
    assert_eq!(done.response.function_error(), Some(expected));
    assert_eq!(done.response.error, None);
    assert_eq!(done.response.error_kind, None);
    assert_eq!(done.response.content_length, Some(expected.len()));
    assert_eq!(done.duration, None);
}

#[test]
fn test_error_payload_keeps_message_and_display_apart() {
    let done = build_error(
        info(),
        ClassifiedError {
            message: "EACCES: /tmp/a".to_string(),
            display: "Permission denied".to_string(),
            kind: ToolErrorKind::PermissionDenied,
        },
    );
    assert_eq!(done.response.function_error(), Some("EACCES: /tmp/a"));
    assert_eq!(done.response.error.as_deref(), Some("EACCES: /tmp/a"));
    assert_eq!(done.response.result_display.as_deref(), Some("Permission denied"));
    assert_eq!(done.response.error_kind, Some(ToolErrorKind::PermissionDenied));
    assert_eq!(done.response.content_length, Some("EACCES: /tmp/a".len()));
}

#[test]
fn test_success_payload() {
    let done = build_success(
        info(),
        &ToolResultContent::text("wrote 3 bytes"),
        Some("Wrote /tmp/a".to_string()),
        Some(PathBuf::from("/out/write_file_call-1.txt")),
        &FunctionResponseConverter::default(),
        "gemini-2.5-pro",
    );
    let parts = &done.response.response_parts;
    assert_eq!(parts.len(), 1);
    assert_eq!(
        parts[0].as_function_response().unwrap().response,
        serde_json::json!({"output": "wrote 3 bytes"})
    );
    assert_eq!(done.response.result_display.as_deref(), Some("Wrote /tmp/a"));
    assert_eq!(
        done.response.output_file,
        Some(PathBuf::from("/out/write_file_call-1.txt"))
    );
    assert_eq!(done.response.content_length, Some(13));
    assert_eq!(done.response.error, None);
}

#[test]
fn test_success_without_text_has_no_length() {
    let done = build_success(
        info(),
        &ToolResultContent::media("image/png", "AAAA"),
        None,
        None,
        &FunctionResponseConverter::default(),
        "gemini-2.5-pro",
    );
    assert_eq!(done.response.content_length, None);
}

#[test]
fn test_duration_from_start_time() {
    let start = Instant::now() - Duration::from_millis(50);
    let done = build_cancelled(info().with_start_time(start), "stopped");
    assert!(done.duration.unwrap() >= Duration::from_millis(50));
}
