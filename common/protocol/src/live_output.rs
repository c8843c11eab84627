//! Incremental output streamed by an invocation before it settles.

use serde::Deserialize;
use serde::Serialize;

/// One live output chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum LiveOutput {
    /// Plain text appended to the output so far.
    Text(String),
    /// A full rendered screen (e.g. from a pseudo terminal), one entry per row.
    Lines(Vec<String>),
}

/// A live output chunk tagged with the call it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveOutputUpdate {
    pub call_id: String,
    pub chunk: LiveOutput,
}
