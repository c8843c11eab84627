use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_clip_respects_char_boundaries() {
    assert_eq!(clip("short"), "short");

    let long = "é".repeat(MAX_FIELD_BYTES);
    let clipped = clip(&long);
    assert!(clipped.len() <= MAX_FIELD_BYTES);
    assert_eq!(clipped.len() % 2, 0);
}

#[test]
fn test_recorder_tracks_status() {
    let request = ToolCallRequest::new("c", "ls", serde_json::json!({}), "p");
    let mut recorder = SpanRecorder::new(tool_call_span(&request));
    recorder.record_input(&request);
    recorder.record_error("boom");
    recorder.record_status(ToolCallStatus::Error);
    assert_eq!(recorder.status, Some(ToolCallStatus::Error));
}
