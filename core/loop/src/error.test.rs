use super::engine_error::*;
use super::*;

#[test]
fn status_codes_match_the_failure_kind() {
    assert_eq!(
        CompileFailedSnafu { tick: 1u64, message: "boom" }.build().status_code(),
        StatusCode::Internal
    );
    assert_eq!(
        ModelPrepareFailedSnafu {
            tick: 1u64,
            message: "bad input"
        }
        .build()
        .status_code(),
        StatusCode::InvalidRequest
    );
    assert_eq!(
        ModelExecuteFailedSnafu { tick: 1u64, message: "down" }.build().status_code(),
        StatusCode::Internal
    );
}

#[test]
fn display_includes_the_tick_number() {
    let err = ModelExecuteFailedSnafu {
        tick: 3u64,
        message: "timeout",
    }
    .build();
    assert!(err.to_string().contains("tick 3"));
}

#[test]
fn phase_and_tick_classify_each_variant() {
    let compile_err = CompileFailedSnafu { tick: 1u64, message: "boom" }.build();
    assert_eq!(compile_err.phase(), agentick_compiler::ErrorPhase::Render);
    assert_eq!(compile_err.tick(), 1);

    let prepare_err = ModelPrepareFailedSnafu { tick: 2u64, message: "bad" }.build();
    assert_eq!(prepare_err.phase(), agentick_compiler::ErrorPhase::ModelExecution);
    assert_eq!(prepare_err.tick(), 2);

    let execute_err = ModelExecuteFailedSnafu { tick: 3u64, message: "down" }.build();
    assert_eq!(execute_err.phase(), agentick_compiler::ErrorPhase::ModelExecution);
    assert_eq!(execute_err.tick(), 3);
}
