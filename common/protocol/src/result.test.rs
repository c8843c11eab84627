use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_text_result() {
    let result = ToolResult::text("hello").with_display("said hello");
    assert!(!result.is_error());
    assert_eq!(result.llm_content.as_text(), Some("hello"));
    assert_eq!(result.return_display.as_deref(), Some("said hello"));
}

#[test]
fn test_error_result() {
    let result = ToolResult::error("boom", ToolErrorKind::ExecutionFailed);
    assert!(result.is_error());
    assert_eq!(
        result.error,
        Some(ToolResultError {
            message: "boom".to_string(),
            kind: ToolErrorKind::ExecutionFailed,
        })
    );
}

#[test]
fn test_only_text_is_textual() {
    assert!(ToolResultContent::structured(serde_json::json!({"a": 1}))
        .as_text()
        .is_none());
    assert!(ToolResultContent::media("image/png", "AAAA").as_text().is_none());
    assert_eq!(ToolResultContent::default().as_text(), Some(""));
}

#[test]
fn test_serde_shape() {
    let json = serde_json::to_value(ToolResult::text("x")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"llm_content": {"type": "text", "text": "x"}})
    );
}
