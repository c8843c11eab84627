//! Hook-wrapped execution of an invocation.
//!
//! [`ToolHookRunner`] is the seam the executor calls through. [`HookChain`]
//! is the default implementation: ordered [`ToolHook`]s run before and after
//! the invocation.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use toolcall_protocol::RuntimeConfig;
use toolcall_protocol::ShellExecutionConfig;
use toolcall_protocol::ToolErrorKind;
use toolcall_protocol::ToolResult;
use tracing::debug;
use tracing::warn;

use crate::error::ToolError;
use crate::invocation::InvocationContext;
use crate::invocation::LiveOutputFn;
use crate::invocation::ProcessIdCallback;
use crate::invocation::ToolInvocation;
use crate::tool::ToolSpec;

/// Everything the hook chain needs to run one invocation.
pub struct HookedExecution<'a> {
    pub invocation: &'a dyn ToolInvocation,
    pub tool_name: &'a str,
    pub call_id: &'a str,
    pub cancel_token: &'a CancellationToken,
    pub tool: &'a ToolSpec,
    pub live_output: Option<LiveOutputFn>,
    pub shell: &'a ShellExecutionConfig,
    pub on_process_id: Option<ProcessIdCallback>,
    pub config: &'a RuntimeConfig,
}

impl HookedExecution<'_> {
    /// Build the context handed to the invocation.
    pub fn invocation_context(&self) -> InvocationContext {
        InvocationContext {
            cancel_token: self.cancel_token.clone(),
            live_output: self.live_output.clone(),
            shell: self.shell.clone(),
            on_process_id: self.on_process_id.clone(),
        }
    }
}

/// Runs an invocation wrapped in cross-cutting behavior.
#[async_trait]
pub trait ToolHookRunner: Send + Sync {
    async fn run(&self, execution: HookedExecution<'_>) -> Result<ToolResult, ToolError>;
}

/// Decision returned by a hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookResult {
    Continue,
    Reject { reason: String },
}

/// A single hook around tool execution.
#[async_trait]
pub trait ToolHook: Send + Sync {
    fn name(&self) -> &str;

    /// Runs before the invocation. A rejection prevents execution.
    async fn before_tool(&self, _tool_name: &str, _params: &Value) -> HookResult {
        HookResult::Continue
    }

    /// Observes the settled result. Rejections here are logged only.
    async fn after_tool(
        &self,
        _tool_name: &str,
        _result: &Result<ToolResult, ToolError>,
    ) -> HookResult {
        HookResult::Continue
    }
}

/// Ordered hooks around an invocation. Empty chains pass straight through.
#[derive(Clone, Default)]
pub struct HookChain {
    hooks: Vec<Arc<dyn ToolHook>>,
}

impl HookChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hook(mut self, hook: Arc<dyn ToolHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl std::fmt::Debug for HookChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.hooks.iter().map(|h| h.name()))
            .finish()
    }
}

#[async_trait]
impl ToolHookRunner for HookChain {
    async fn run(&self, execution: HookedExecution<'_>) -> Result<ToolResult, ToolError> {
        let tool_name = execution.tool_name;
        let params = execution.invocation.params();

        for hook in &self.hooks {
            if let HookResult::Reject { reason } = hook.before_tool(tool_name, params).await {
                warn!(
                    tool = %tool_name,
                    call_id = %execution.call_id,
                    hook = %hook.name(),
                    reason = %reason,
                    "Tool call rejected by pre-hook"
                );
                return Err(ToolError::structured(
                    format!("Tool call rejected by hook '{}': {reason}", hook.name()),
                    reason,
                    ToolErrorKind::PolicyViolation,
                ));
            }
        }

        let ctx = execution.invocation_context();
        let result = execution.invocation.execute(ctx).await;

        for hook in &self.hooks {
            if let HookResult::Reject { reason } = hook.after_tool(tool_name, &result).await {
                debug!(
                    tool = %tool_name,
                    call_id = %execution.call_id,
                    hook = %hook.name(),
                    reason = %reason,
                    "Post-hook rejection ignored"
                );
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "hooks.test.rs"]
mod tests;
