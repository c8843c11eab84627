//! The tool-specific executable unit bound to a call.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use toolcall_protocol::LiveOutput;
use toolcall_protocol::ShellExecutionConfig;
use toolcall_protocol::ToolResult;

use crate::error::ToolError;

/// Receives live output chunks from a running invocation.
pub type LiveOutputFn = Arc<dyn Fn(LiveOutput) + Send + Sync>;

/// Receives the identity of a spawned process.
pub type ProcessIdCallback = Arc<dyn Fn(u32) + Send + Sync>;

/// Everything an invocation may use while running.
#[derive(Clone)]
pub struct InvocationContext {
    /// Cooperative cancellation. Invocations should stop promptly once cancelled.
    pub cancel_token: CancellationToken,
    pub live_output: Option<LiveOutputFn>,
    pub shell: ShellExecutionConfig,
    /// Present only for invocations that expose a process identity.
    pub on_process_id: Option<ProcessIdCallback>,
}

impl InvocationContext {
    pub fn new(cancel_token: CancellationToken) -> Self {
        Self {
            cancel_token,
            live_output: None,
            shell: ShellExecutionConfig::default(),
            on_process_id: None,
        }
    }

    /// Stream a chunk to the caller, if anyone is listening.
    pub fn emit_output(&self, chunk: LiveOutput) {
        if let Some(live_output) = &self.live_output {
            live_output(chunk);
        }
    }

    /// Report the spawned process identity, if the caller asked for it.
    pub fn report_process_id(&self, pid: u32) {
        if let Some(on_process_id) = &self.on_process_id {
            on_process_id(pid);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

impl fmt::Debug for InvocationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationContext")
            .field("cancelled", &self.cancel_token.is_cancelled())
            .field("live_output", &self.live_output.is_some())
            .field("shell", &self.shell)
            .field("on_process_id", &self.on_process_id.is_some())
            .finish()
    }
}

/// A resolved, ready-to-run tool call.
#[async_trait]
pub trait ToolInvocation: Send + Sync {
    /// Validated parameters.
    fn params(&self) -> &Value;

    /// Short description of what the call will do.
    fn description(&self) -> String;

    /// Whether the invocation spawns a process whose identity it reports.
    fn exposes_process_id(&self) -> bool {
        false
    }

    /// Run the invocation to completion.
    ///
    /// A returned `ToolResult` with an error descriptor is a failed call;
    /// `Err` is reserved for faults.
    async fn execute(&self, ctx: InvocationContext) -> Result<ToolResult, ToolError>;
}
