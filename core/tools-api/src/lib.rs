//! Seams and call-state types for executing a single tool call.
//!
//! - [`ToolCall`] / [`CompletedToolCall`]: the call lifecycle
//! - [`ToolInvocation`]: the tool-specific executable unit
//! - [`ToolHookRunner`]: the hook-wrapped execution chain ([`HookChain`])
//! - [`ArtifactStore`]: persistence for oversized output ([`FsArtifactStore`])
//! - [`TelemetrySink`]: truncation records ([`TracingTelemetry`])
//! - [`TranscriptConverter`]: transcript parts ([`FunctionResponseConverter`])
//! - [`LiveOutputSink`] / [`CallStateNotifier`]: caller callbacks

pub mod artifact;
pub mod call;
pub mod callbacks;
pub mod error;
pub mod hooks;
pub mod invocation;
pub mod telemetry;
pub mod tool;
pub mod transcript;

pub use artifact::ArtifactStore;
pub use artifact::FsArtifactStore;
pub use call::CallInfo;
pub use call::CompletedCall;
pub use call::CompletedToolCall;
pub use call::ToolCall;
pub use callbacks::CallStateNotifier;
pub use callbacks::ChannelOutputSink;
pub use callbacks::LiveOutputSink;
pub use error::ToolError;
pub use hooks::HookChain;
pub use hooks::HookResult;
pub use hooks::HookedExecution;
pub use hooks::ToolHook;
pub use hooks::ToolHookRunner;
pub use invocation::InvocationContext;
pub use invocation::LiveOutputFn;
pub use invocation::ProcessIdCallback;
pub use invocation::ToolInvocation;
pub use telemetry::TelemetrySink;
pub use telemetry::ToolOutputTruncatedEvent;
pub use telemetry::TracingTelemetry;
pub use tool::ToolSpec;
pub use transcript::FunctionResponseConverter;
pub use transcript::TranscriptConverter;
