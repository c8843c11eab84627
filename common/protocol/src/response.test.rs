use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_error_response_part() {
    let part = ResponsePart::error_response("call-1", "shell", "exit code 2");
    let response = part.as_function_response().unwrap();
    assert_eq!(response.id, "call-1");
    assert_eq!(response.name, "shell");
    assert_eq!(response.response, serde_json::json!({"error": "exit code 2"}));
}

#[test]
fn test_function_error_lookup() {
    let response = ToolCallResponse {
        call_id: "call-1".to_string(),
        response_parts: vec![
            ResponsePart::Text {
                text: "ignored".to_string(),
            },
            ResponsePart::error_response("call-1", "shell", "denied"),
        ],
        result_display: None,
        error: None,
        error_kind: None,
        output_file: None,
        content_length: None,
    };
    assert_eq!(response.function_error(), Some("denied"));
}

#[test]
fn test_optional_fields_skipped() {
    let response = ToolCallResponse {
        call_id: "c".to_string(),
        response_parts: Vec::new(),
        result_display: None,
        error: None,
        error_kind: None,
        output_file: None,
        content_length: Some(3),
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"call_id": "c", "response_parts": [], "content_length": 3})
    );
}
