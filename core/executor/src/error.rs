//! Precondition violations raised by the executor.

use snafu::Snafu;
use toolcall_error::ErrorExt;
use toolcall_error::Location;
use toolcall_error::StatusCode;
use toolcall_protocol::ToolCallStatus;

/// Caller misuse of [`ToolExecutor::execute`](crate::ToolExecutor::execute).
///
/// These never describe the outcome of the call itself.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum ExecutorError {
    #[snafu(display("Tool call {call_id} has no resolved tool"))]
    MissingTool {
        call_id: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Tool call {call_id} has no resolved invocation"))]
    MissingInvocation {
        call_id: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Tool call {call_id} is {status}, expected pending"))]
    NotPending {
        call_id: String,
        status: ToolCallStatus,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for ExecutorError {
    fn status_code(&self) -> StatusCode {
        match self {
            ExecutorError::MissingTool { .. }
            | ExecutorError::MissingInvocation { .. }
            | ExecutorError::NotPending { .. } => StatusCode::PreconditionFailed,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
