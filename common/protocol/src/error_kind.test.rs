use super::*;
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

#[test]
fn test_only_unhandled_is_unstructured() {
    let unstructured: Vec<_> = ToolErrorKind::iter()
        .filter(|kind| !kind.is_structured())
        .collect();
    assert_eq!(unstructured, vec![ToolErrorKind::Unhandled]);
}

#[test]
fn test_status_code_mapping() {
    assert_eq!(
        ToolErrorKind::InvalidToolParams.status_code(),
        StatusCode::InvalidArguments
    );
    assert_eq!(
        ToolErrorKind::PolicyViolation.status_code(),
        StatusCode::PolicyViolation
    );
    assert_eq!(ToolErrorKind::Unhandled.status_code(), StatusCode::Unknown);
}

#[test]
fn test_serde_names() {
    assert_eq!(
        serde_json::to_string(&ToolErrorKind::ShellExecuteError).unwrap(),
        r#""shell_execute_error""#
    );
    let kind: ToolErrorKind = serde_json::from_str(r#""invalid_tool_params""#).unwrap();
    assert_eq!(kind, ToolErrorKind::InvalidToolParams);
    assert_eq!(ToolErrorKind::McpToolError.to_string(), "mcp_tool_error");
}
