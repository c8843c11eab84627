use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn request() -> ToolCallRequest {
    ToolCallRequest::new("call-1", "read_file", json!({"path": "/a"}), "prompt-1")
}

fn completed(info: CallInfo) -> CompletedCall {
    CompletedCall {
        info,
        response: ToolCallResponse {
            call_id: "call-1".to_string(),
            response_parts: Vec::new(),
            result_display: None,
            error: None,
            error_kind: None,
            output_file: None,
            content_length: None,
        },
        duration: Some(Duration::from_millis(5)),
    }
}

#[test]
fn test_status_discriminant() {
    let info = CallInfo::new(request());
    assert_eq!(ToolCall::pending(info.clone()).status(), ToolCallStatus::Pending);
    let executing = ToolCall::Executing {
        info: info.clone(),
        pid: 42,
    };
    assert_eq!(executing.status(), ToolCallStatus::Executing);
    assert_eq!(executing.pid(), Some(42));
    assert!(!executing.is_terminal());
    assert!(executing.response().is_none());

    let done: ToolCall = CompletedToolCall::Cancelled(completed(info)).into();
    assert_eq!(done.status(), ToolCallStatus::Cancelled);
    assert!(done.is_terminal());
    assert_eq!(done.duration(), Some(Duration::from_millis(5)));
    assert_eq!(done.call_id(), "call-1");
}

#[test]
fn test_completed_conversion_preserves_variant() {
    let info = CallInfo::new(request());
    for (call, status) in [
        (
            CompletedToolCall::Success(completed(info.clone())),
            ToolCallStatus::Success,
        ),
        (
            CompletedToolCall::Error(completed(info.clone())),
            ToolCallStatus::Error,
        ),
        (
            CompletedToolCall::Cancelled(completed(info.clone())),
            ToolCallStatus::Cancelled,
        ),
    ] {
        assert_eq!(call.status(), status);
        assert_eq!(ToolCall::from(call).status(), status);
    }
}

#[test]
fn test_call_info_builders() {
    let start = Instant::now();
    let info = CallInfo::new(request())
        .with_tool(Arc::new(ToolSpec::new("read_file")))
        .with_outcome(ConfirmationOutcome::ProceedOnce)
        .with_start_time(start);
    assert_eq!(info.call_id(), "call-1");
    assert_eq!(info.start_time, Some(start));
    assert!(info.elapsed().is_some());
    assert!(CallInfo::new(request()).elapsed().is_none());
    assert!(format!("{info:?}").contains("read_file"));
}
