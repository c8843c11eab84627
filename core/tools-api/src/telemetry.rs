//! Telemetry records emitted while executing calls.

use serde::Serialize;
use tracing::info;

/// Emitted when successful output is truncated and saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutputTruncatedEvent {
    pub prompt_id: String,
    pub tool_name: String,
    pub original_content_length: usize,
    pub truncated_content_length: usize,
    pub threshold: usize,
    /// Preview line budget.
    pub lines: usize,
}

/// Receives telemetry records.
pub trait TelemetrySink: Send + Sync {
    fn record_output_truncated(&self, event: &ToolOutputTruncatedEvent);
}

/// Logs telemetry records through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTelemetry;

impl TelemetrySink for TracingTelemetry {
    fn record_output_truncated(&self, event: &ToolOutputTruncatedEvent) {
        info!(
            prompt_id = %event.prompt_id,
            tool = %event.tool_name,
            original_content_length = event.original_content_length,
            truncated_content_length = event.truncated_content_length,
            threshold = event.threshold,
            lines = event.lines,
            "Tool output truncated"
        );
    }
}
