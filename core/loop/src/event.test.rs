use super::*;

#[tokio::test]
async fn sequence_numbers_increase_monotonically() {
    let (tx, mut rx) = mpsc::channel(16);
    let emitter = EventEmitter::new(tx);

    emitter.emit(EngineEvent::TickStart { tick: 1 }).await;
    emitter.emit(EngineEvent::TickEnd { tick: 1, aborted: false }).await;

    let first = rx.recv().await.unwrap();
    let second = rx.recv().await.unwrap();
    assert_eq!(first.sequence, 0);
    assert_eq!(second.sequence, 1);
}

#[tokio::test]
async fn emitting_after_the_receiver_is_dropped_does_not_panic() {
    let (tx, rx) = mpsc::channel(16);
    drop(rx);
    let emitter = EventEmitter::new(tx);
    emitter.emit(EngineEvent::TickStart { tick: 1 }).await;
}

#[tokio::test]
async fn event_emitter_forwards_confirmation_required_as_a_tool_event_sink() {
    use agentick_tools::ToolEventSink;

    let (tx, mut rx) = mpsc::channel(16);
    let emitter = EventEmitter::new(tx);

    emitter
        .confirmation_required("call-1", "shell", &serde_json::json!({"cmd": "ls"}), Some("destructive"))
        .await;

    let received = rx.recv().await.unwrap();
    match received.event {
        EngineEvent::ConfirmationRequired {
            tool_call_id,
            tool_name,
            reason,
            ..
        } => {
            assert_eq!(tool_call_id, "call-1");
            assert_eq!(tool_name, "shell");
            assert_eq!(reason.as_deref(), Some("destructive"));
        }
        other => panic!("expected ConfirmationRequired, got {other:?}"),
    }
}

#[tokio::test]
async fn cloned_emitters_share_the_same_counter() {
    let (tx, mut rx) = mpsc::channel(16);
    let emitter = EventEmitter::new(tx);
    let clone = emitter.clone();

    emitter.emit(EngineEvent::TickStart { tick: 1 }).await;
    clone.emit(EngineEvent::TickStart { tick: 2 }).await;

    let first = rx.recv().await.unwrap();
    let second = rx.recv().await.unwrap();
    assert_eq!(first.sequence, 0);
    assert_eq!(second.sequence, 1);
}
