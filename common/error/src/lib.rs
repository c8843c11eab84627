//! Shared error classification for the toolcall workspace.
//!
//! Every crate-level error enum implements [`ErrorExt`] so that callers can
//! reason about failures through a single [`StatusCode`] taxonomy instead of
//! matching on crate-specific variants.

mod ext;
mod status_code;

pub use ext::BoxedError;
pub use ext::ErrorExt;
pub use ext::PlainError;
pub use ext::boxed;
pub use snafu::Location;
pub use status_code::StatusCategory;
pub use status_code::StatusCode;
pub use status_code::StatusMeta;

/// Boxed dynamic error used at trait-object seams.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
