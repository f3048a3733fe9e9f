use super::*;

/// Scenario 4 (§8): stop-vs-continue priority — continue and stop at the
/// same priority, stop wins.
#[test]
fn stop_wins_at_equal_priority() {
    let requests = vec![
        ControlRequest::r#continue(0, Some("keep".into())),
        ControlRequest::stop(0, Some("enough".into())),
    ];
    assert!(!resolve_should_continue(false, &requests));
}

#[test]
fn continue_flips_false_seed_to_true() {
    let requests = vec![ControlRequest::r#continue(0, None)];
    assert!(resolve_should_continue(false, &requests));
}

#[test]
fn higher_priority_stop_overrides_lower_priority_continue() {
    let requests = vec![
        ControlRequest::r#continue(5, None),
        ControlRequest::stop(10, None),
    ];
    assert!(!resolve_should_continue(true, &requests));
}

#[test]
fn no_requests_preserves_seed() {
    assert!(resolve_should_continue(true, &[]));
    assert!(!resolve_should_continue(false, &[]));
}

#[test]
fn continue_does_not_override_true_seed_at_lower_priority_than_nothing() {
    // seed already true, no requests beat it down unless a stop is present.
    let requests = vec![ControlRequest::r#continue(3, None)];
    assert!(resolve_should_continue(true, &requests));
}
