//! Lifecycle states of a tool call.
//!
//! ```text
//! Pending ──► Executing ──┐
//!    │                    ├──► Success | Error | Cancelled
//!    └────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use toolcall_protocol::ConfirmationOutcome;
use toolcall_protocol::ToolCallRequest;
use toolcall_protocol::ToolCallResponse;
use toolcall_protocol::ToolCallStatus;

use crate::invocation::ToolInvocation;
use crate::tool::ToolSpec;

/// Fields shared by every call state.
#[derive(Clone)]
pub struct CallInfo {
    pub request: ToolCallRequest,
    pub tool: Option<Arc<ToolSpec>>,
    pub invocation: Option<Arc<dyn ToolInvocation>>,
    /// How the user confirmed the call, if confirmation was required.
    pub outcome: Option<ConfirmationOutcome>,
    pub start_time: Option<Instant>,
}

impl CallInfo {
    pub fn new(request: ToolCallRequest) -> Self {
        Self {
            request,
            tool: None,
            invocation: None,
            outcome: None,
            start_time: None,
        }
    }

    pub fn with_tool(mut self, tool: Arc<ToolSpec>) -> Self {
        self.tool = Some(tool);
        self
    }

    pub fn with_invocation(mut self, invocation: Arc<dyn ToolInvocation>) -> Self {
        self.invocation = Some(invocation);
        self
    }

    pub fn with_outcome(mut self, outcome: ConfirmationOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_start_time(mut self, start_time: Instant) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Record the start time as now.
    pub fn started_now(self) -> Self {
        self.with_start_time(Instant::now())
    }

    pub fn call_id(&self) -> &str {
        &self.request.call_id
    }

    /// Time since the recorded start, if any.
    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|start| start.elapsed())
    }
}

impl fmt::Debug for CallInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallInfo")
            .field("request", &self.request)
            .field("tool", &self.tool)
            .field("invocation", &self.invocation.as_ref().map(|i| i.description()))
            .field("outcome", &self.outcome)
            .field("start_time", &self.start_time)
            .finish()
    }
}

/// A call that reached a terminal status.
#[derive(Debug, Clone)]
pub struct CompletedCall {
    pub info: CallInfo,
    pub response: ToolCallResponse,
    /// `None` when no start time was recorded.
    pub duration: Option<Duration>,
}

/// A tool call in any lifecycle state.
#[derive(Debug, Clone)]
pub enum ToolCall {
    Pending(CallInfo),
    /// A process has been spawned for the call.
    Executing { info: CallInfo, pid: u32 },
    Success(CompletedCall),
    Error(CompletedCall),
    Cancelled(CompletedCall),
}

impl ToolCall {
    pub fn pending(info: CallInfo) -> Self {
        ToolCall::Pending(info)
    }

    pub fn status(&self) -> ToolCallStatus {
        match self {
            ToolCall::Pending(_) => ToolCallStatus::Pending,
            ToolCall::Executing { .. } => ToolCallStatus::Executing,
            ToolCall::Success(_) => ToolCallStatus::Success,
            ToolCall::Error(_) => ToolCallStatus::Error,
            ToolCall::Cancelled(_) => ToolCallStatus::Cancelled,
        }
    }

    pub fn info(&self) -> &CallInfo {
        match self {
            ToolCall::Pending(info) | ToolCall::Executing { info, .. } => info,
            ToolCall::Success(done) | ToolCall::Error(done) | ToolCall::Cancelled(done) => {
                &done.info
            }
        }
    }

    pub fn request(&self) -> &ToolCallRequest {
        &self.info().request
    }

    pub fn call_id(&self) -> &str {
        self.info().call_id()
    }

    pub fn pid(&self) -> Option<u32> {
        match self {
            ToolCall::Executing { pid, .. } => Some(*pid),
            _ => None,
        }
    }

    pub fn response(&self) -> Option<&ToolCallResponse> {
        self.completed().map(|done| &done.response)
    }

    pub fn duration(&self) -> Option<Duration> {
        self.completed().and_then(|done| done.duration)
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    fn completed(&self) -> Option<&CompletedCall> {
        match self {
            ToolCall::Success(done) | ToolCall::Error(done) | ToolCall::Cancelled(done) => {
                Some(done)
            }
            ToolCall::Pending(_) | ToolCall::Executing { .. } => None,
        }
    }
}

/// The terminal outcome of executing a call.
#[derive(Debug, Clone)]
pub enum CompletedToolCall {
    Success(CompletedCall),
    Error(CompletedCall),
    Cancelled(CompletedCall),
}

impl CompletedToolCall {
    pub fn status(&self) -> ToolCallStatus {
        match self {
            CompletedToolCall::Success(_) => ToolCallStatus::Success,
            CompletedToolCall::Error(_) => ToolCallStatus::Error,
            CompletedToolCall::Cancelled(_) => ToolCallStatus::Cancelled,
        }
    }

    pub fn completed(&self) -> &CompletedCall {
        match self {
            CompletedToolCall::Success(done)
            | CompletedToolCall::Error(done)
            | CompletedToolCall::Cancelled(done) => done,
        }
    }

    pub fn info(&self) -> &CallInfo {
        &self.completed().info
    }

    pub fn response(&self) -> &ToolCallResponse {
        &self.completed().response
    }

    pub fn duration(&self) -> Option<Duration> {
        self.completed().duration
    }
}

impl From<CompletedToolCall> for ToolCall {
    fn from(call: CompletedToolCall) -> Self {
        match call {
            CompletedToolCall::Success(done) => ToolCall::Success(done),
            CompletedToolCall::Error(done) => ToolCall::Error(done),
            CompletedToolCall::Cancelled(done) => ToolCall::Cancelled(done),
        }
    }
}

#[cfg(test)]
#[path = "call.test.rs"]
mod tests;
