use super::*;
use agentick_com::TickState;

fn tick() -> TickState {
    TickState::new(1, None, Vec::new())
}

#[tokio::test]
async fn no_callbacks_preserves_the_seed() {
    let com = Com::new();
    assert!(apply_continuation_policy(&[], &tick(), &com, true).await);
    assert!(!apply_continuation_policy(&[], &tick(), &com, false).await);
}

#[tokio::test]
async fn a_later_callback_overrides_an_earlier_one() {
    let com = Com::new();
    let callbacks: Vec<ContinuationCallback> = vec![
        Arc::new(|_t| ContinuationOutcome::Stop(Some("done".into()))),
        Arc::new(|_t| ContinuationOutcome::Continue(None)),
    ];
    assert!(apply_continuation_policy(&callbacks, &tick(), &com, true).await);
}

#[tokio::test]
async fn defer_preserves_the_running_value() {
    let com = Com::new();
    let callbacks: Vec<ContinuationCallback> = vec![
        Arc::new(|_t| ContinuationOutcome::Stop(None)),
        Arc::new(|_t| ContinuationOutcome::Defer),
    ];
    assert!(!apply_continuation_policy(&callbacks, &tick(), &com, true).await);
}

#[tokio::test]
async fn a_high_priority_com_stop_wins_over_a_deferring_chain() {
    let com = Com::new();
    com.request_stop(100, Some("external abort".into())).await;
    let callbacks: Vec<ContinuationCallback> = vec![Arc::new(|_t| ContinuationOutcome::Defer)];
    assert!(!apply_continuation_policy(&callbacks, &tick(), &com, true).await);
}
