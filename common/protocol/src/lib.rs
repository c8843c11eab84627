//! Protocol types for the toolcall workspace.
//!
//! This crate provides the plain data exchanged between an agent runtime and
//! the tool-call executor:
//! - Tool call requests and raw tool results
//! - Error classification kinds
//! - Transcript-facing responses
//! - Live output chunks
//! - Runtime configuration values

mod error_kind;
mod live_output;
mod outcome;
mod request;
mod response;
mod result;
mod runtime_config;
mod shell_config;
mod status;
mod tool_config;

pub use error_kind::ToolErrorKind;
pub use live_output::LiveOutput;
pub use live_output::LiveOutputUpdate;
pub use outcome::ConfirmationOutcome;
pub use request::ToolCallRequest;
pub use response::FunctionResponse;
pub use response::InlineData;
pub use response::ResponsePart;
pub use response::ToolCallResponse;
pub use result::ToolResult;
pub use result::ToolResultContent;
pub use result::ToolResultError;
pub use runtime_config::RuntimeConfig;
pub use shell_config::ShellExecutionConfig;
pub use status::ToolCallStatus;
pub use tool_config::DEFAULT_TRUNCATE_OUTPUT_LINES;
pub use tool_config::DEFAULT_TRUNCATE_OUTPUT_THRESHOLD;
pub use tool_config::ToolConfig;
