//! Workspace-wide error plumbing: a unified [`status_code::StatusCode`]
//! taxonomy, the [`ext::ErrorExt`] trait every crate-local error implements,
//! and the `#[stack_trace_debug]` attribute macro re-exported for
//! convenience so crates only need to depend on `agentick-error`.

mod ext;
pub mod status_code;

pub use agentick_stack_trace_macro::stack_trace_debug;
pub use ext::ErrorExt;
pub use ext::PlainError;
pub use ext::boxed;
pub use snafu::Location;
pub use status_code::StatusCategory;
pub use status_code::StatusCode;
pub use status_code::StatusMeta;
