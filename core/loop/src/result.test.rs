use super::*;
use agentick_com::ToolResultErrorKind;

#[test]
fn stop_reason_variants_clone_and_debug() {
    for reason in [StopReason::ContinuationPolicy, StopReason::MaxTicksReached, StopReason::Aborted] {
        let cloned = reason.clone();
        assert_eq!(reason, cloned);
        let _debug = format!("{reason:?}");
    }
}

#[test]
fn execution_outcome_carries_new_timeline_entries() {
    let entries = vec![
        TimelineEntry::message(hyper_sdk::Role::Assistant, vec![]),
        TimelineEntry::tool_result_err("call_1", vec![], ToolResultErrorKind::TimeoutError),
    ];
    let outcome = ExecutionOutcome {
        ticks_completed: 2,
        aborted: false,
        stop_reason: StopReason::MaxTicksReached,
        new_timeline_entries: entries.clone(),
    };
    assert_eq!(outcome.ticks_completed, 2);
    assert_eq!(outcome.new_timeline_entries.len(), entries.len());
    assert_eq!(outcome.stop_reason, StopReason::MaxTicksReached);
}
