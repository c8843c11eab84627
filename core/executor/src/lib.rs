//! Drives a single tool call from pending to exactly one terminal outcome.
//!
//! ## Flow
//!
//! ```text
//! execute(call) ─► hook chain ─► invocation.execute()
//!                                      │
//!                     cancellation checkpoint (cancel wins)
//!                                      │
//!           ┌──────────────┬───────────┴───────────┐
//!       Cancelled   Error (classified)   Success (output governed)
//! ```
//!
//! Only precondition violations ([`ExecutorError`]) escape [`ToolExecutor::execute`].
//! Every fault raised while running the call becomes an error outcome.

pub mod classifier;
pub mod error;
pub mod executor;
pub mod governor;
pub mod response;
mod span;

pub use classifier::ClassifiedError;
pub use classifier::classify_fault;
pub use classifier::classify_result_error;
pub use error::ExecutorError;
pub use executor::ToolExecutor;
pub use governor::GovernedOutput;
pub use governor::govern_output;
pub use response::CANCELLED_PREFIX;
pub use response::USER_CANCELLED_REASON;
