//! Engine failure semantics (§4.6, §7 error routing): compiler and model
//! adapter failures are captured per-tick rather than unwinding the whole
//! execution, so they carry a tick number for the caller's error routing.

use agentick_compiler::ErrorPhase;
use agentick_error::ErrorExt;
use agentick_error::Location;
use agentick_error::StatusCode;
use agentick_error::stack_trace_debug;
use snafu::Snafu;

#[stack_trace_debug]
#[derive(Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum EngineError {
    #[snafu(display("tick {tick}: compile failed: {message}"))]
    CompileFailed {
        tick: u64,
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("tick {tick}: model adapter failed to prepare input: {message}"))]
    ModelPrepareFailed {
        tick: u64,
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("tick {tick}: model adapter failed to execute: {message}"))]
    ModelExecuteFailed {
        tick: u64,
        message: String,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for EngineError {
    fn status_code(&self) -> StatusCode {
        match self {
            EngineError::CompileFailed { .. } => StatusCode::Internal,
            EngineError::ModelPrepareFailed { .. } => StatusCode::InvalidRequest,
            EngineError::ModelExecuteFailed { .. } => StatusCode::Internal,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl EngineError {
    /// Classifies this error into one of §7's `on_error` phases, so
    /// `Engine::run` can build an `EngineErrorReport` without re-deriving
    /// the mapping at each call site.
    pub fn phase(&self) -> ErrorPhase {
        match self {
            EngineError::CompileFailed { .. } => ErrorPhase::Render,
            EngineError::ModelPrepareFailed { .. } | EngineError::ModelExecuteFailed { .. } => ErrorPhase::ModelExecution,
        }
    }

    /// The tick this error occurred on, for `EngineErrorReport.context`.
    pub fn tick(&self) -> u64 {
        match self {
            EngineError::CompileFailed { tick, .. } => *tick,
            EngineError::ModelPrepareFailed { tick, .. } => *tick,
            EngineError::ModelExecuteFailed { tick, .. } => *tick,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
#[path = "error.test.rs"]
mod tests;
