//! Persistence for oversized tool output.
//!
//! Saved output lives at `{dir}/tool-outputs/{tool}_{call_id}.txt`.

use std::path::Path;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::error::ToolError;

/// Subdirectory of the output directory holding saved output.
pub const TOOL_OUTPUTS_DIR: &str = "tool-outputs";

/// Stores the full text of truncated output.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Save `content` and return where it was written.
    async fn save(
        &self,
        content: &str,
        tool_name: &str,
        call_id: &str,
        dir: &Path,
    ) -> Result<PathBuf, ToolError>;
}

/// Writes artifacts to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsArtifactStore;

impl FsArtifactStore {
    pub fn new() -> Self {
        Self
    }

    /// Path an artifact for this call would be written to.
    pub fn artifact_path(dir: &Path, tool_name: &str, call_id: &str) -> PathBuf {
        dir.join(TOOL_OUTPUTS_DIR).join(format!(
            "{}_{}.txt",
            sanitize_file_component(tool_name),
            sanitize_file_component(call_id)
        ))
    }
}

#[async_trait]
impl ArtifactStore for FsArtifactStore {
    async fn save(
        &self,
        content: &str,
        tool_name: &str,
        call_id: &str,
        dir: &Path,
    ) -> Result<PathBuf, ToolError> {
        let path = Self::artifact_path(dir, tool_name, call_id);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, content).await?;
        debug!(
            call_id,
            tool = %tool_name,
            path = %path.display(),
            bytes = content.len(),
            "Saved tool output"
        );
        Ok(path)
    }
}

/// Keep `[A-Za-z0-9_.-]`, replace anything else with `_`.
fn sanitize_file_component(raw: &str) -> String {
    let sanitized: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    // Never produce `.` or `..` path components.
    if sanitized.chars().all(|c| c == '.') {
        sanitized.replace('.', "_")
    } else {
        sanitized
    }
}

#[cfg(test)]
#[path = "artifact.test.rs"]
mod tests;
