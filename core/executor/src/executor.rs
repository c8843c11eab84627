//! The tool call executor.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use futures::FutureExt;
use snafu::OptionExt;
use tokio_util::sync::CancellationToken;
use toolcall_protocol::LiveOutput;
use toolcall_protocol::RuntimeConfig;
use toolcall_protocol::ToolResult;
use toolcall_protocol::ToolResultContent;
use toolcall_tools_api::ArtifactStore;
use toolcall_tools_api::CallInfo;
use toolcall_tools_api::CallStateNotifier;
use toolcall_tools_api::CompletedToolCall;
use toolcall_tools_api::FsArtifactStore;
use toolcall_tools_api::FunctionResponseConverter;
use toolcall_tools_api::HookChain;
use toolcall_tools_api::HookedExecution;
use toolcall_tools_api::LiveOutputFn;
use toolcall_tools_api::LiveOutputSink;
use toolcall_tools_api::ProcessIdCallback;
use toolcall_tools_api::TelemetrySink;
use toolcall_tools_api::ToolCall;
use toolcall_tools_api::ToolError;
use toolcall_tools_api::ToolHookRunner;
use toolcall_tools_api::TracingTelemetry;
use toolcall_tools_api::TranscriptConverter;
use tracing::Instrument;
use tracing::debug;
use tracing::warn;

use crate::classifier::classify_fault;
use crate::classifier::classify_panic;
use crate::classifier::classify_result_error;
use crate::error::ExecutorError;
use crate::error::executor_error::MissingInvocationSnafu;
use crate::error::executor_error::MissingToolSnafu;
use crate::error::executor_error::NotPendingSnafu;
use crate::governor::govern_output;
use crate::response;
use crate::response::USER_CANCELLED_REASON;
use crate::span::SpanRecorder;
use crate::span::tool_call_span;

/// How the invocation settled, before the cancellation checkpoint.
enum Settled {
    Result(ToolResult),
    Fault(ToolError),
    Panicked(Box<dyn std::any::Any + Send>),
}

/// Drives one pending tool call to a terminal outcome.
///
/// The executor holds no per-call state; one instance may run many calls
/// concurrently.
///
/// # Example
///
/// ```ignore
/// let executor = ToolExecutor::default();
/// let done = executor
///     .execute(ToolCall::Pending(info), &cancel, None, Arc::new(|_: &ToolCall| {}), &config)
///     .await?;
/// ```
#[derive(Clone)]
pub struct ToolExecutor {
    hooks: Arc<dyn ToolHookRunner>,
    artifact_store: Arc<dyn ArtifactStore>,
    telemetry: Arc<dyn TelemetrySink>,
    converter: Arc<dyn TranscriptConverter>,
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::new(
            Arc::new(HookChain::new()),
            Arc::new(FsArtifactStore),
            Arc::new(TracingTelemetry),
            Arc::new(FunctionResponseConverter::default()),
        )
    }
}

impl std::fmt::Debug for ToolExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolExecutor").finish_non_exhaustive()
    }
}

impl ToolExecutor {
    pub fn new(
        hooks: Arc<dyn ToolHookRunner>,
        artifact_store: Arc<dyn ArtifactStore>,
        telemetry: Arc<dyn TelemetrySink>,
        converter: Arc<dyn TranscriptConverter>,
    ) -> Self {
        Self {
            hooks,
            artifact_store,
            telemetry,
            converter,
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ToolHookRunner>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_artifact_store(mut self, artifact_store: Arc<dyn ArtifactStore>) -> Self {
        self.artifact_store = artifact_store;
        self
    }

    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn with_converter(mut self, converter: Arc<dyn TranscriptConverter>) -> Self {
        self.converter = converter;
        self
    }

    /// Execute a pending call.
    ///
    /// Returns exactly one terminal outcome. If `cancel_token` is cancelled
    /// by the time the invocation settles, the call is cancelled regardless
    /// of its result. `on_state_change` is notified (synchronously, at most
    /// once) if the invocation reports a process identity.
    ///
    /// # Errors
    ///
    /// Only precondition violations: the call is not pending, or it has no
    /// resolved tool or invocation.
    pub async fn execute(
        &self,
        call: ToolCall,
        cancel_token: &CancellationToken,
        live_output: Option<Arc<dyn LiveOutputSink>>,
        on_state_change: Arc<dyn CallStateNotifier>,
        config: &RuntimeConfig,
    ) -> Result<CompletedToolCall, ExecutorError> {
        let mut recorder = SpanRecorder::new(tool_call_span(call.request()));
        recorder.record_input(call.request());
        let span = recorder.span().clone();

        let completed = self
            .execute_inner(
                call,
                cancel_token,
                live_output,
                on_state_change,
                config,
                &recorder,
            )
            .instrument(span)
            .await?;

        recorder.record_status(completed.status());
        Ok(completed)
    }

    async fn execute_inner(
        &self,
        call: ToolCall,
        cancel_token: &CancellationToken,
        live_output: Option<Arc<dyn LiveOutputSink>>,
        on_state_change: Arc<dyn CallStateNotifier>,
        config: &RuntimeConfig,
        recorder: &SpanRecorder,
    ) -> Result<CompletedToolCall, ExecutorError> {
        let info = match call {
            ToolCall::Pending(info) => info,
            other => {
                return NotPendingSnafu {
                    call_id: other.call_id(),
                    status: other.status(),
                }
                .fail();
            }
        };
        let call_id = info.request.call_id.clone();
        let tool = info.tool.clone().context(MissingToolSnafu {
            call_id: call_id.as_str(),
        })?;
        let invocation = info.invocation.clone().context(MissingInvocationSnafu {
            call_id: call_id.as_str(),
        })?;

        let live_output_fn = match live_output {
            Some(sink) if tool.can_update_output => Some(forward_live_output(sink, &call_id)),
            _ => None,
        };
        let settled_flag = Arc::new(AtomicBool::new(false));
        let on_process_id = invocation.exposes_process_id().then(|| {
            report_process_id(info.clone(), on_state_change, Arc::clone(&settled_flag))
        });

        debug!(call_id = %call_id, tool = %info.request.name, "Executing tool call");

        let execution = HookedExecution {
            invocation: invocation.as_ref(),
            tool_name: &info.request.name,
            call_id: &call_id,
            cancel_token,
            tool: &tool,
            live_output: live_output_fn,
            shell: &config.shell,
            on_process_id,
            config,
        };
        let settled = match AssertUnwindSafe(self.hooks.run(execution))
            .catch_unwind()
            .await
        {
            Ok(Ok(result)) => {
                recorder.record_output(&result);
                Settled::Result(result)
            }
            Ok(Err(fault)) => {
                recorder.record_error(&fault.to_string());
                Settled::Fault(fault)
            }
            Err(payload) => {
                recorder.record_error("panicked");
                Settled::Panicked(payload)
            }
        };
        // Reports arriving from here on would describe a call that is about
        // to become terminal.
        settled_flag.store(true, Ordering::SeqCst);

        // Cancellation wins over whatever the invocation produced.
        if cancel_token.is_cancelled() {
            debug!(call_id = %call_id, "Tool call cancelled");
            return Ok(CompletedToolCall::Cancelled(response::build_cancelled(
                info,
                USER_CANCELLED_REASON,
            )));
        }

        let completed = match settled {
            Settled::Fault(fault) => {
                CompletedToolCall::Error(response::build_error(info, classify_fault(&fault)))
            }
            Settled::Panicked(payload) => {
                let classified = classify_panic(payload);
                warn!(call_id = %call_id, error = %classified.message, "Tool invocation panicked");
                CompletedToolCall::Error(response::build_error(info, classified))
            }
            Settled::Result(mut result) => match result.error.take() {
                Some(error) => {
                    let classified =
                        classify_result_error(&error, result.return_display.as_deref());
                    CompletedToolCall::Error(response::build_error(info, classified))
                }
                None => {
                    CompletedToolCall::Success(self.complete_success(info, result, config).await)
                }
            },
        };

        debug!(call_id = %call_id, status = %completed.status(), "Tool call finished");
        Ok(completed)
    }

    async fn complete_success(
        &self,
        info: CallInfo,
        result: ToolResult,
        config: &RuntimeConfig,
    ) -> toolcall_tools_api::CompletedCall {
        let ToolResult {
            llm_content,
            return_display,
            ..
        } = result;

        let (content, output_file) = match llm_content {
            ToolResultContent::Text { text } => {
                let governed = govern_output(
                    text,
                    &info.request,
                    &config.tool,
                    &config.output_dir,
                    self.artifact_store.as_ref(),
                    self.telemetry.as_ref(),
                )
                .await;
                (
                    ToolResultContent::Text {
                        text: governed.content,
                    },
                    governed.output_file,
                )
            }
            other => (other, None),
        };

        response::build_success(
            info,
            &content,
            return_display,
            output_file,
            self.converter.as_ref(),
            &config.model,
        )
    }
}

/// Tag chunks with the call id and hand them to the sink.
///
/// A panicking sink drops the chunk; the invocation keeps running.
fn forward_live_output(sink: Arc<dyn LiveOutputSink>, call_id: &str) -> LiveOutputFn {
    let call_id = call_id.to_string();
    Arc::new(move |chunk: LiveOutput| {
        let forwarded =
            std::panic::catch_unwind(AssertUnwindSafe(|| sink.on_output(&call_id, chunk)));
        if forwarded.is_err() {
            warn!(call_id = %call_id, "Live output sink panicked, chunk dropped");
        }
    })
}

/// Move the call to `Executing` the first time a process identity arrives.
///
/// Reports made after the invocation settled are dropped.
fn report_process_id(
    info: CallInfo,
    notifier: Arc<dyn CallStateNotifier>,
    settled: Arc<AtomicBool>,
) -> ProcessIdCallback {
    let reported = AtomicBool::new(false);
    Arc::new(move |pid: u32| {
        if settled.load(Ordering::SeqCst) {
            debug!(
                call_id = %info.request.call_id,
                pid,
                "Ignoring process id reported after settlement"
            );
            return;
        }
        if reported.swap(true, Ordering::SeqCst) {
            debug!(call_id = %info.request.call_id, pid, "Ignoring repeated process id report");
            return;
        }
        debug!(call_id = %info.request.call_id, pid, "Tool call process started");
        notifier.notify(&ToolCall::Executing {
            info: info.clone(),
            pid,
        });
    })
}

#[cfg(test)]
#[path = "executor.test.rs"]
mod tests;
