use super::*;
use crate::delta::AdapterDelta::*;
use crate::event::LifecycleEvent;
use pretty_assertions::assert_eq;
use serde_json::json;

/// Scenario 1 (§8): simple streamed text.
#[test]
fn simple_streamed_text() {
    let mut acc = Accumulator::new();
    let mut events = Vec::new();
    events.extend(acc.push(MessageStart));
    events.extend(acc.push(Text {
        delta: "Hello".to_string(),
        metadata: None,
    }));
    events.extend(acc.push(Text {
        delta: " World".to_string(),
        metadata: None,
    }));
    events.extend(acc.push(MessageEnd {
        stop_reason: StopReason::Stop,
        usage: Some(Usage {
            input_tokens: 5,
            output_tokens: 2,
            total_tokens: 7,
        }),
        model_id: None,
    }));

    let kinds: Vec<&str> = events
        .iter()
        .map(|e| match e {
            LifecycleEvent::MessageStart => "message_start",
            LifecycleEvent::ContentStart { .. } => "content_start",
            LifecycleEvent::ContentDelta { .. } => "content_delta",
            LifecycleEvent::ContentEnd { .. } => "content_end",
            LifecycleEvent::Content { .. } => "content",
            LifecycleEvent::MessageEnd { .. } => "message_end",
            _ => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "message_start",
            "content_start",
            "content_delta",
            "content_delta",
            "content_end",
            "content",
            "message_end",
        ]
    );

    let out = acc.to_model_output();
    assert_eq!(out.text.as_deref(), Some("Hello World"));
    assert!(out.tool_calls.is_empty());
    assert_eq!(out.usage.input_tokens, 5);
    assert_eq!(out.usage.output_tokens, 2);
    assert_eq!(out.usage.total_tokens, 7);
}

/// Scenario 2 (§8): streamed tool call without explicit end — finalized at
/// `message_end` by parsing the accumulated JSON.
#[test]
fn tool_call_finalized_at_message_end() {
    let mut acc = Accumulator::new();
    acc.push(ToolCallStart {
        id: "c1".to_string(),
        name: "search".to_string(),
    });
    acc.push(ToolCallDelta {
        id: "c1".to_string(),
        delta: "{\"q\":\"".to_string(),
    });
    acc.push(ToolCallDelta {
        id: "c1".to_string(),
        delta: "hello\"}".to_string(),
    });
    let events = acc.push(MessageEnd {
        stop_reason: StopReason::ToolUse,
        usage: None,
        model_id: None,
    });

    assert!(events
        .iter()
        .any(|e| matches!(e, LifecycleEvent::ToolCallEnd { id, .. } if id == "c1")));
    assert!(events
        .iter()
        .any(|e| matches!(e, LifecycleEvent::ToolCall { id, .. } if id == "c1")));

    let out = acc.to_model_output();
    assert_eq!(out.tool_calls.len(), 1);
    assert_eq!(out.tool_calls[0].id, "c1");
    assert_eq!(out.tool_calls[0].name, "search");
    assert_eq!(out.tool_calls[0].input, json!({"q": "hello"}));
}

/// Scenario 3 (§8): reasoning closes on tool_call_start with incremented
/// block index for the tool call.
#[test]
fn reasoning_then_tool_call() {
    let mut acc = Accumulator::new();
    acc.push(Reasoning {
        delta: "Think".to_string(),
        metadata: None,
    });
    let events = acc.push(ToolCallStart {
        id: "t".to_string(),
        name: "x".to_string(),
    });
    assert!(events
        .iter()
        .any(|e| matches!(e, LifecycleEvent::ReasoningEnd { .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, LifecycleEvent::Reasoning { text, .. } if text == "Think")));

    let tool_call_start_idx = events.iter().find_map(|e| match e {
        LifecycleEvent::ToolCallStart { block_index, .. } => Some(*block_index),
        _ => None,
    });
    assert_eq!(tool_call_start_idx, Some(1));

    acc.push(ToolCallEnd {
        id: "t".to_string(),
        input: Some(json!({})),
    });
    let final_events = acc.push(MessageEnd {
        stop_reason: StopReason::ToolUse,
        usage: None,
        model_id: None,
    });
    assert!(final_events
        .iter()
        .any(|e| matches!(e, LifecycleEvent::MessageEnd { .. })));

    let out = acc.to_model_output();
    assert_eq!(out.reasoning.as_deref(), Some("Think"));
    assert_eq!(out.tool_calls.len(), 1);
}

/// Invalid JSON in an unterminated tool call falls back to `{"raw": ...}`
/// rather than erroring (§4.3, boundary behavior).
#[test]
fn malformed_tool_call_json_falls_back_to_raw() {
    let mut acc = Accumulator::new();
    acc.push(ToolCallStart {
        id: "c2".to_string(),
        name: "broken".to_string(),
    });
    acc.push(ToolCallDelta {
        id: "c2".to_string(),
        delta: "{not valid json".to_string(),
    });
    acc.push(MessageEnd {
        stop_reason: StopReason::ToolUse,
        usage: None,
        model_id: None,
    });
    let out = acc.to_model_output();
    assert_eq!(out.tool_calls[0].input, json!({"raw": "{not valid json"}));
}

/// Boundary behavior (§8): empty stream produces an empty message.
#[test]
fn empty_stream_produces_empty_message() {
    let mut acc = Accumulator::new();
    acc.push(MessageEnd {
        stop_reason: StopReason::Unspecified,
        usage: None,
        model_id: None,
    });
    let out = acc.to_model_output();
    assert_eq!(out.text, None);
    assert_eq!(out.reasoning, None);
    assert!(out.tool_calls.is_empty());
    assert_eq!(out.stop_reason, StopReason::Unspecified);
}

/// `to_model_output()` is idempotent with no intervening pushes (§8
/// round-trip property).
#[test]
fn to_model_output_is_idempotent() {
    let mut acc = Accumulator::new();
    acc.push(Text {
        delta: "hi".to_string(),
        metadata: None,
    });
    acc.push(MessageEnd {
        stop_reason: StopReason::Stop,
        usage: None,
        model_id: None,
    });
    assert_eq!(acc.to_model_output(), acc.to_model_output());
}

/// Usage merges by max, never regressing as later (possibly smaller, e.g.
/// out-of-order) deltas arrive.
#[test]
fn usage_merges_by_max() {
    let mut acc = Accumulator::new();
    acc.push(Usage(Usage {
        input_tokens: 10,
        output_tokens: 1,
        total_tokens: 11,
    }));
    acc.push(Usage(Usage {
        input_tokens: 3,
        output_tokens: 4,
        total_tokens: 7,
    }));
    acc.push(MessageEnd {
        stop_reason: StopReason::Stop,
        usage: None,
        model_id: None,
    });
    let out = acc.to_model_output();
    assert_eq!(out.usage.input_tokens, 10);
    assert_eq!(out.usage.output_tokens, 4);
    assert_eq!(out.usage.total_tokens, 11);
}
