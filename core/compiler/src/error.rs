//! Compiler failure semantics (§4.2): a component error during evaluation
//! is captured with `phase=render`; the partial compiled structure is
//! discarded.

use agentick_error::ErrorExt;
use agentick_error::Location;
use agentick_error::StatusCode;
use agentick_error::stack_trace_debug;
use snafu::Snafu;

#[stack_trace_debug]
#[derive(Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum CompilerError {
    #[snafu(display("component {component} failed to render: {message}"))]
    Render {
        component: String,
        message: String,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for CompilerError {
    fn status_code(&self) -> StatusCode {
        match self {
            CompilerError::Render { .. } => StatusCode::Internal,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

pub type Result<T> = std::result::Result<T, CompilerError>;
