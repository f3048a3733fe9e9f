//! Error types for sandbox configuration, path resolution, and process
//! supervision (§4.5).

use agentick_error::ErrorExt;
use agentick_error::Location;
use agentick_error::StatusCode;
use agentick_error::stack_trace_debug;
use snafu::Snafu;

#[stack_trace_debug]
#[derive(Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum SandboxError {
    #[snafu(display("{message}"))]
    WriteDenied {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("path denied: {path}"))]
    PathDenied {
        path: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("network access denied by sandbox"))]
    NetworkDenied {
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("invalid path: {message}"))]
    InvalidPath {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("no supported sandbox strategy is available on this platform"))]
    NoStrategyAvailable {
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("requested sandbox strategy '{requested}' is not available: {reason}"))]
    StrategyUnavailable {
        requested: String,
        reason: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("failed to spawn sandboxed process: {message}"))]
    SpawnFailed {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("command timed out after {timeout_secs}s"))]
    Timeout {
        timeout_secs: u64,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("cgroup operation failed: {message}"))]
    CgroupError {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("workspace setup failed: {message}"))]
    WorkspaceError {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("file operation failed: {message}"))]
    FileOperationFailed {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("edit mismatch: {message}"))]
    EditMismatch {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for SandboxError {
    fn status_code(&self) -> StatusCode {
        match self {
            SandboxError::WriteDenied { .. } => StatusCode::PermissionDenied,
            SandboxError::PathDenied { .. } => StatusCode::PermissionDenied,
            SandboxError::NetworkDenied { .. } => StatusCode::PermissionDenied,
            SandboxError::InvalidPath { .. } => StatusCode::InvalidArguments,
            SandboxError::NoStrategyAvailable { .. } => StatusCode::Unsupported,
            SandboxError::StrategyUnavailable { .. } => StatusCode::Unsupported,
            SandboxError::SpawnFailed { .. } => StatusCode::IoError,
            SandboxError::Timeout { .. } => StatusCode::Timeout,
            SandboxError::CgroupError { .. } => StatusCode::IoError,
            SandboxError::WorkspaceError { .. } => StatusCode::IoError,
            SandboxError::FileOperationFailed { .. } => StatusCode::IoError,
            SandboxError::EditMismatch { .. } => StatusCode::InvalidArguments,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

pub type Result<T> = std::result::Result<T, SandboxError>;

#[cfg(test)]
#[path = "error.test.rs"]
mod tests;
