use super::*;
use pretty_assertions::assert_eq;

fn convert(content: &ToolResultContent, model: &str) -> Vec<ResponsePart> {
    FunctionResponseConverter::default().convert("read_file", "call-1", content, model)
}

#[test]
fn test_text_becomes_single_function_response() {
    let parts = convert(&ToolResultContent::text("hello"), "gemini-2.5-pro");
    assert_eq!(
        parts,
        vec![ResponsePart::FunctionResponse(FunctionResponse {
            id: "call-1".to_string(),
            name: "read_file".to_string(),
            response: json!({"output": "hello"}),
            parts: Vec::new(),
        })]
    );
}

#[test]
fn test_structured_output_kept_as_json() {
    let parts = convert(
        &ToolResultContent::structured(json!({"files": ["a", "b"]})),
        "gemini-2.5-pro",
    );
    let response = parts[0].as_function_response().unwrap();
    assert_eq!(response.response, json!({"output": {"files": ["a", "b"]}}));
}

#[test]
fn test_media_split_for_plain_models() {
    let parts = convert(
        &ToolResultContent::media("image/png", "iVBORw0KGgo="),
        "gemini-2.5-pro",
    );
    assert_eq!(parts.len(), 2);
    assert!(parts[0].as_function_response().unwrap().parts.is_empty());
    assert_eq!(
        parts[1],
        ResponsePart::InlineData(InlineData {
            mime_type: "image/png".to_string(),
            data: "iVBORw0KGgo=".to_string(),
        })
    );
}

#[test]
fn test_media_embedded_for_multimodal_models() {
    let parts = convert(
        &ToolResultContent::media("image/png", "iVBORw0KGgo="),
        "gemini-3-pro-preview",
    );
    assert_eq!(parts.len(), 1);
    let response = parts[0].as_function_response().unwrap();
    assert_eq!(response.parts.len(), 1);
    assert_eq!(
        response.response,
        json!({"output": "Binary content provided (image/png)."})
    );
}
