//! Extension trait implemented by every crate-local error enum so errors
//! compose into one workspace-wide status-code taxonomy (see
//! [`crate::status_code::StatusCode`]).

use std::any::Any;
use std::fmt;

use crate::status_code::StatusCode;

/// Common behavior every error type in the workspace exposes.
pub trait ErrorExt: std::error::Error + Send + Sync + 'static {
    /// The unified status code this error maps to.
    fn status_code(&self) -> StatusCode;

    /// Self as `&dyn Any`, for downcasting across crate boundaries.
    fn as_any(&self) -> &dyn Any;

    /// Whether callers should retry the operation that produced this error.
    fn is_retryable(&self) -> bool {
        self.status_code().meta().retryable
    }

    /// Message safe to show to an end user: internal-error variants are
    /// replaced with a generic message carrying only the status code, all
    /// other variants show their `Display` text.
    fn output_msg(&self) -> String {
        if self.status_code() == StatusCode::Internal {
            format!("Internal error: {}", self.status_code() as i32)
        } else {
            self.to_string()
        }
    }
}

/// A type-erased boxed error carrying an explicit status code, for
/// converting foreign error types (e.g. `std::io::Error`) at a crate
/// boundary without writing a dedicated `From` impl.
pub struct PlainError {
    message: String,
    status_code: StatusCode,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl PlainError {
    pub fn new(message: impl Into<String>, status_code: StatusCode) -> Self {
        Self {
            message: message.into(),
            status_code,
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        status_code: StatusCode,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            status_code,
            source: Some(Box::new(source)),
        }
    }
}

impl fmt::Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for PlainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl ErrorExt for PlainError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Box a foreign error with an explicit status code.
pub fn boxed(
    err: impl std::error::Error + Send + Sync + 'static,
    status_code: StatusCode,
) -> PlainError {
    PlainError::with_source(err.to_string(), status_code, err)
}

#[cfg(test)]
#[path = "ext.test.rs"]
mod tests;
