use super::*;

#[test]
fn test_terminal_statuses() {
    assert!(!ToolCallStatus::Pending.is_terminal());
    assert!(!ToolCallStatus::Executing.is_terminal());
    assert!(ToolCallStatus::Success.is_terminal());
    assert!(ToolCallStatus::Error.is_terminal());
    assert!(ToolCallStatus::Cancelled.is_terminal());
}

#[test]
fn test_status_names() {
    assert_eq!(ToolCallStatus::Cancelled.to_string(), "cancelled");
    assert_eq!(
        serde_json::to_string(&ToolCallStatus::Executing).unwrap(),
        r#""executing""#
    );
}
