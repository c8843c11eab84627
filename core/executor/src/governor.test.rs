use super::*;
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::sync::Mutex;
use tempfile::TempDir;
use toolcall_tools_api::FsArtifactStore;
use toolcall_tools_api::ToolError;

#[derive(Default)]
struct RecordingTelemetry {
    events: Mutex<Vec<ToolOutputTruncatedEvent>>,
}

impl TelemetrySink for RecordingTelemetry {
    fn record_output_truncated(&self, event: &ToolOutputTruncatedEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

struct FailingStore;

#[async_trait]
impl ArtifactStore for FailingStore {
    async fn save(
        &self,
        _content: &str,
        _tool_name: &str,
        _call_id: &str,
        _dir: &Path,
    ) -> Result<PathBuf, ToolError> {
        Err(ToolError::internal("read-only filesystem"))
    }
}

fn request() -> ToolCallRequest {
    ToolCallRequest::new("call-1", "run_shell_command", serde_json::json!({}), "prompt-1")
}

fn limits(threshold: i32, lines: i32) -> ToolConfig {
    ToolConfig {
        enable_output_truncation: true,
        truncate_output_threshold: threshold,
        truncate_output_lines: lines,
    }
}

#[tokio::test]
async fn test_non_positive_limits_are_noop() {
    let dir = TempDir::new().unwrap();
    let telemetry = RecordingTelemetry::default();
    let content = "y".repeat(10_000);

    for (threshold, lines) in [(0, 5), (500, 0), (-10, 5), (500, -1)] {
        let governed = govern_output(
            content.clone(),
            &request(),
            &limits(threshold, lines),
            dir.path(),
            &FsArtifactStore,
            &telemetry,
        )
        .await;
        assert_eq!(governed, GovernedOutput::unchanged(content.clone()));
    }
    assert!(telemetry.events.lock().unwrap().is_empty());
    assert!(!dir.path().join("tool-outputs").exists());
}

#[tokio::test]
async fn test_content_within_threshold_is_unchanged() {
    let dir = TempDir::new().unwrap();
    let telemetry = RecordingTelemetry::default();
    let content = "z".repeat(500);

    let governed = govern_output(
        content.clone(),
        &request(),
        &limits(500, 5),
        dir.path(),
        &FsArtifactStore,
        &telemetry,
    )
    .await;

    assert_eq!(governed.content, content);
    assert_eq!(governed.output_file, None);
    assert!(telemetry.events.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_oversized_content_is_truncated_and_saved() {
    let dir = TempDir::new().unwrap();
    let telemetry = RecordingTelemetry::default();
    let content = "a".repeat(1000);

    let governed = govern_output(
        content.clone(),
        &request(),
        &limits(500, 5),
        dir.path(),
        &FsArtifactStore,
        &telemetry,
    )
    .await;

    let output_file = governed.output_file.clone().unwrap();
    assert_eq!(std::fs::read_to_string(&output_file).unwrap(), content);
    assert!(governed.content.len() < content.len());
    assert!(governed.content.contains(&output_file.display().to_string()));
    assert!(governed.content.contains(TRUNCATION_SEPARATOR));

    let events = telemetry.events.lock().unwrap();
    assert_eq!(
        *events,
        vec![ToolOutputTruncatedEvent {
            prompt_id: "prompt-1".to_string(),
            tool_name: "run_shell_command".to_string(),
            original_content_length: 1000,
            truncated_content_length: governed.content.len(),
            threshold: 500,
            lines: 5,
        }]
    );
}

#[tokio::test]
async fn test_store_failure_keeps_content() {
    let dir = TempDir::new().unwrap();
    let telemetry = RecordingTelemetry::default();
    let content = "b".repeat(2000);

    let governed = govern_output(
        content.clone(),
        &request(),
        &limits(100, 5),
        dir.path(),
        &FailingStore,
        &telemetry,
    )
    .await;

    assert_eq!(governed, GovernedOutput::unchanged(content));
    assert!(telemetry.events.lock().unwrap().is_empty());
}

#[test]
fn test_preview_keeps_head_and_tail() {
    let content: String = (0..100)
        .map(|i| format!("line {i:03} {}", "-".repeat(40)))
        .collect::<Vec<_>>()
        .join("\n");

    let stub = format_truncated(&content, Path::new("/out/shell_1.txt"), 10);

    assert!(stub.len() < content.len());
    assert!(stub.contains("Showing the first 2 and last 8 of 100 lines"));
    assert!(stub.contains("line 000"));
    assert!(stub.contains("line 001"));
    assert!(!stub.contains("line 002"));
    assert!(!stub.contains("line 091"));
    assert!(stub.contains("line 092"));
    assert!(stub.contains("line 099"));
}

#[test]
fn test_budget_halves_until_shorter() {
    // Many short lines: showing every line would exceed the original.
    let content = vec!["x"; 600].join("\n");

    let stub = format_truncated(&content, Path::new("/out/shell_1.txt"), 1000);

    assert!(stub.len() < content.len());
}

#[test]
fn test_wrap_lines_is_char_safe() {
    let line = "é".repeat(250);
    let wrapped = wrap_lines(&format!("short\n{line}"), 120);
    assert_eq!(wrapped.len(), 4);
    assert_eq!(wrapped[0], "short");
    assert_eq!(wrapped[1].chars().count(), 120);
    assert_eq!(wrapped[2].chars().count(), 120);
    assert_eq!(wrapped[3].chars().count(), 10);
}

#[tokio::test]
async fn test_small_output_still_shrinks() {
    let dir = TempDir::new().unwrap();
    let telemetry = RecordingTelemetry::default();
    let content = "a".repeat(50);

    let governed = govern_output(
        content.clone(),
        &request(),
        &limits(10, 5),
        dir.path(),
        &FsArtifactStore,
        &telemetry,
    )
    .await;

    let output_file = governed.output_file.clone().unwrap();
    assert_eq!(std::fs::read_to_string(&output_file).unwrap(), content);
    assert!(governed.content.len() < content.len());

    let events = telemetry.events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].original_content_length, 50);
    assert_eq!(events[0].truncated_content_length, governed.content.len());
    assert!(events[0].truncated_content_length < events[0].original_content_length);
}

#[test]
fn test_compact_stub_keeps_path_when_it_fits() {
    let content = "b".repeat(100);

    let stub = format_truncated(&content, Path::new("/o/s.txt"), 5);

    assert!(stub.len() < content.len());
    assert!(stub.ends_with("[truncated, full output: /o/s.txt]"));
    assert!(stub.starts_with('b'));
}

#[test]
fn test_compact_stub_is_char_safe() {
    let content = "é".repeat(20);

    let stub = format_truncated(&content, Path::new("/tmp/out/é_call.txt"), 5);

    assert!(stub.len() < content.len());
    assert!(stub.starts_with("[truncated"));
}
