//! Truncation of oversized successful text output.
//!
//! Output above the configured threshold is saved through the
//! [`ArtifactStore`] and replaced by a stub that names the saved file and
//! previews the head and tail of the content.

use std::path::Path;
use std::path::PathBuf;

use toolcall_protocol::ToolCallRequest;
use toolcall_protocol::ToolConfig;
use toolcall_tools_api::ArtifactStore;
use toolcall_tools_api::TelemetrySink;
use toolcall_tools_api::ToolOutputTruncatedEvent;
use tracing::debug;
use tracing::warn;

/// Marks the gap between the head and tail of a preview.
pub const TRUNCATION_SEPARATOR: &str = "... [CONTENT TRUNCATED] ...";

/// Preview lines longer than this many characters are wrapped.
pub const MAX_PREVIEW_LINE_CHARS: usize = 120;

/// Text output after governance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovernedOutput {
    pub content: String,
    /// Set when the content was truncated and saved.
    pub output_file: Option<PathBuf>,
}

impl GovernedOutput {
    fn unchanged(content: String) -> Self {
        Self {
            content,
            output_file: None,
        }
    }
}

/// Truncate `content` if it exceeds the configured threshold.
///
/// Governance is skipped when truncation is disabled or either limit is
/// not positive. If the artifact store fails, the content is returned
/// unchanged.
pub async fn govern_output(
    content: String,
    request: &ToolCallRequest,
    limits: &ToolConfig,
    output_dir: &Path,
    store: &dyn ArtifactStore,
    telemetry: &dyn TelemetrySink,
) -> GovernedOutput {
    let Some((threshold, max_lines)) = limits.truncation_limits() else {
        return GovernedOutput::unchanged(content);
    };
    if content.len() <= threshold {
        return GovernedOutput::unchanged(content);
    }

    let output_file = match store
        .save(&content, &request.name, &request.call_id, output_dir)
        .await
    {
        Ok(path) => path,
        Err(err) => {
            warn!(
                call_id = %request.call_id,
                tool = %request.name,
                error = %err,
                "Failed to save oversized tool output, keeping it in context"
            );
            return GovernedOutput::unchanged(content);
        }
    };

    let truncated = format_truncated(&content, &output_file, max_lines);
    telemetry.record_output_truncated(&ToolOutputTruncatedEvent {
        prompt_id: request.prompt_id.clone(),
        tool_name: request.name.clone(),
        original_content_length: content.len(),
        truncated_content_length: truncated.len(),
        threshold,
        lines: max_lines,
    });
    debug!(
        call_id = %request.call_id,
        original = content.len(),
        truncated = truncated.len(),
        path = %output_file.display(),
        "Truncated tool output"
    );

    GovernedOutput {
        content: truncated,
        output_file: Some(output_file),
    }
}

/// Build the stub that replaces truncated content.
///
/// The preview budget is halved until the stub is shorter than `content`.
/// When even the header alone is too long, a compact reference is used.
/// The result is always strictly shorter than `content`.
fn format_truncated(content: &str, output_file: &Path, max_lines: usize) -> String {
    let lines = wrap_lines(content, MAX_PREVIEW_LINE_CHARS);
    let mut budget = max_lines;
    loop {
        let stub = render_stub(content.len(), output_file, &lines, budget);
        if stub.len() < content.len() {
            return stub;
        }
        if budget == 0 {
            return compact_stub(content, output_file);
        }
        budget /= 2;
    }
}

/// A content prefix followed by a short path reference, cut to fit below
/// `content.len()` bytes.
fn compact_stub(content: &str, output_file: &Path) -> String {
    let limit = content.len().saturating_sub(1);
    let reference = format!("[truncated, full output: {}]", output_file.display());
    if reference.len() >= limit {
        return char_prefix(&reference, limit).to_string();
    }
    let head = char_prefix(content, limit - reference.len() - 1);
    format!("{head}\n{reference}")
}

/// Longest prefix of `s` that is at most `max_bytes` long and ends on a
/// char boundary.
fn char_prefix(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fn render_stub(original_len: usize, output_file: &Path, lines: &[String], budget: usize) -> String {
    let mut stub = format!(
        "Tool output was too large and has been truncated.\n\
         The full output ({original_len} bytes) has been saved to: {}\n",
        output_file.display()
    );
    if budget == 0 {
        return stub;
    }

    if lines.len() <= budget {
        stub.push_str(&format!("Showing all {} lines:\n\n", lines.len()));
        stub.push_str(&lines.join("\n"));
        return stub;
    }

    let head = budget / 5;
    let tail = budget - head;
    stub.push_str(&format!(
        "Showing the first {head} and last {tail} of {} lines:\n\n",
        lines.len()
    ));
    for line in &lines[..head] {
        stub.push_str(line);
        stub.push('\n');
    }
    stub.push_str(TRUNCATION_SEPARATOR);
    for line in &lines[lines.len() - tail..] {
        stub.push('\n');
        stub.push_str(line);
    }
    stub
}

/// Split on `\n` and wrap long lines at `width` characters.
fn wrap_lines(content: &str, width: usize) -> Vec<String> {
    let mut wrapped = Vec::new();
    for line in content.split('\n') {
        if line.chars().count() <= width {
            wrapped.push(line.to_string());
            continue;
        }
        let chars: Vec<char> = line.chars().collect();
        wrapped.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    wrapped
}

#[cfg(test)]
#[path = "governor.test.rs"]
mod tests;
