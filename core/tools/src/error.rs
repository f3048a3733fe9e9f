//! Error types for tool execution (§4.4). These are the Rust-level
//! failures the executor itself can hit (bad handler wiring, I/O); the
//! non-fatal, model-visible classification lives in
//! `agentick_com::ToolResultErrorKind` — every variant here maps to one of
//! those kinds in `executor::result_kind_for` and never escapes
//! `execute_tool_calls` as an `Err`.

use agentick_error::ErrorExt;
use agentick_error::Location;
use agentick_error::StatusCode;
use agentick_error::stack_trace_debug;
use snafu::Snafu;

#[stack_trace_debug]
#[derive(Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum ToolError {
    #[snafu(display("Tool not found: {name}"))]
    NotFound {
        name: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Invalid input: {message}"))]
    InvalidInput {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Execution failed: {message}"))]
    ExecutionFailed {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Permission denied: {message}"))]
    PermissionDenied {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Timeout after {timeout_secs}s"))]
    Timeout {
        timeout_secs: u64,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Aborted: {reason}"))]
    Aborted {
        reason: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("IO error: {message}"))]
    Io {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Internal error: {message}"))]
    Internal {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    /// A middleware rejected the call in its `before` stage.
    #[snafu(display("Middleware rejected: {reason}"))]
    MiddlewareRejected {
        reason: String,
        #[snafu(implicit)]
        location: Location,
    },

    /// Cancelled via the session's cancellation token.
    #[snafu(display("Cancelled"))]
    Cancelled {
        #[snafu(implicit)]
        location: Location,
    },

    /// Transport-level failure reaching a CLIENT/MCP surface
    /// (ETIMEDOUT/ECONNRESET/ENOTFOUND-equivalent).
    #[snafu(display("Network error: {message}"))]
    NetworkError {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    /// HTTP 429-equivalent from a PROVIDER/MCP backend.
    #[snafu(display("Rate limited: {message}"))]
    RateLimited {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    /// HTTP 401/403-equivalent.
    #[snafu(display("Auth error: {message}"))]
    AuthError {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    /// The confirmation bridge explicitly denied the call.
    #[snafu(display("User denied: {message}"))]
    UserDenied {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    /// The confirmation bridge never answered within `ToolMetadata::timeout`.
    #[snafu(display("Confirmation timed out after {timeout_secs}s"))]
    ConfirmationTimeout {
        timeout_secs: u64,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ToolError {
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            ToolError::Timeout { .. }
                | ToolError::Io { .. }
                | ToolError::NetworkError { .. }
                | ToolError::RateLimited { .. }
        )
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ToolError::Cancelled { .. })
    }
}

impl ErrorExt for ToolError {
    fn status_code(&self) -> StatusCode {
        match self {
            ToolError::NotFound { .. } => StatusCode::InvalidArguments,
            ToolError::InvalidInput { .. } => StatusCode::InvalidArguments,
            ToolError::ExecutionFailed { .. } => StatusCode::External,
            ToolError::PermissionDenied { .. } => StatusCode::PermissionDenied,
            ToolError::Timeout { .. } => StatusCode::Timeout,
            ToolError::Aborted { .. } => StatusCode::Cancelled,
            ToolError::Io { .. } => StatusCode::IoError,
            ToolError::Internal { .. } => StatusCode::Internal,
            ToolError::MiddlewareRejected { .. } => StatusCode::PermissionDenied,
            ToolError::Cancelled { .. } => StatusCode::Cancelled,
            ToolError::NetworkError { .. } => StatusCode::NetworkError,
            ToolError::RateLimited { .. } => StatusCode::RateLimited,
            ToolError::AuthError { .. } => StatusCode::AuthenticationFailed,
            ToolError::UserDenied { .. } => StatusCode::PermissionDenied,
            ToolError::ConfirmationTimeout { .. } => StatusCode::Timeout,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        tool_error::IoSnafu {
            message: err.to_string(),
        }
        .build()
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        tool_error::InvalidInputSnafu {
            message: format!("JSON error: {err}"),
        }
        .build()
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;

#[cfg(test)]
#[path = "error.test.rs"]
mod tests;
