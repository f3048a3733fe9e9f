//! COM failure semantics (§4.1): duplicate tool registration is a hard
//! error; duplicate section ids are not (they override silently and are
//! recorded in the compiled structure's collision list instead).

use agentick_error::ErrorExt;
use agentick_error::Location;
use agentick_error::StatusCode;
use agentick_error::stack_trace_debug;
use snafu::Snafu;

#[stack_trace_debug]
#[derive(Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum ComError {
    /// Two tools were registered under the same name.
    #[snafu(display("tool registration conflict: {name}"))]
    ToolRegistrationConflict {
        name: String,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for ComError {
    fn status_code(&self) -> StatusCode {
        match self {
            ComError::ToolRegistrationConflict { .. } => StatusCode::InvalidRequest,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

pub type Result<T> = std::result::Result<T, ComError>;
