//! Span bookkeeping for one tool call.

use std::time::Instant;

use toolcall_protocol::ToolCallRequest;
use toolcall_protocol::ToolCallStatus;
use toolcall_protocol::ToolResult;
use tracing::Span;
use tracing::debug;
use tracing::field;
use tracing::info_span;

/// Upper bound on bytes recorded into a span field.
const MAX_FIELD_BYTES: usize = 4096;

pub(crate) fn tool_call_span(request: &ToolCallRequest) -> Span {
    info_span!(
        "tool_call",
        call_id = %request.call_id,
        tool = %request.name,
        input = field::Empty,
        output = field::Empty,
        error = field::Empty,
        status = field::Empty,
    )
}

/// Records span slots and closes the span on drop, whatever the exit path.
pub(crate) struct SpanRecorder {
    span: Span,
    started: Instant,
    status: Option<ToolCallStatus>,
}

impl SpanRecorder {
    pub(crate) fn new(span: Span) -> Self {
        Self {
            span,
            started: Instant::now(),
            status: None,
        }
    }

    pub(crate) fn span(&self) -> &Span {
        &self.span
    }

    pub(crate) fn record_input(&self, request: &ToolCallRequest) {
        let input = serde_json::to_string(request).unwrap_or_default();
        self.span.record("input", clip(&input));
    }

    pub(crate) fn record_output(&self, result: &ToolResult) {
        let output = serde_json::to_string(result).unwrap_or_default();
        self.span.record("output", clip(&output));
    }

    pub(crate) fn record_error(&self, message: &str) {
        self.span.record("error", clip(message));
    }

    pub(crate) fn record_status(&mut self, status: ToolCallStatus) {
        self.status = Some(status);
        self.span.record("status", status.as_ref());
    }
}

impl Drop for SpanRecorder {
    fn drop(&mut self) {
        let elapsed_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match self.status {
            Some(status) => {
                debug!(parent: &self.span, status = %status, elapsed_ms, "Tool call span closed");
            }
            None => {
                debug!(parent: &self.span, elapsed_ms, "Tool call span closed without an outcome");
            }
        }
    }
}

/// Cut `value` to at most `MAX_FIELD_BYTES` on a char boundary.
fn clip(value: &str) -> &str {
    if value.len() <= MAX_FIELD_BYTES {
        return value;
    }
    let mut end = MAX_FIELD_BYTES;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

#[cfg(test)]
#[path = "span.test.rs"]
mod tests;
