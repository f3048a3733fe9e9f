//! Lifecycle event stream (§5, §6): the engine's per-tick events, in
//! deterministic emission order — `tick_start`, stream events, `tool_call_*`,
//! `tool_result`, `tick_end`, and finally `execution_end`. The buffer is
//! multi-producer (engine + tool handlers) / multi-consumer, with sequence
//! numbers assigned by the engine on emit (§5 shared-resource policy).

use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use agentick_accumulator::LifecycleEvent;
use agentick_com::TimelineEntry;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::debug;

/// One event in the lifecycle stream.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    TickStart { tick: u64 },
    Stream(LifecycleEvent),
    ToolCallStart { id: String, name: String },
    /// A tool call suspended awaiting client confirmation (§4.4 step 3).
    ConfirmationRequired {
        tool_call_id: String,
        tool_name: String,
        input: Value,
        reason: Option<String>,
    },
    ToolCallEnd { id: String },
    ToolResult { tool_use_id: String, success: bool },
    TickEnd { tick: u64, aborted: bool },
    ExecutionEnd { new_timeline_entries: Vec<TimelineEntry>, aborted: bool },
}

/// An [`EngineEvent`] tagged with its emission-order sequence number.
#[derive(Debug, Clone)]
pub struct SequencedEvent {
    pub sequence: u64,
    pub event: EngineEvent,
}

/// Assigns sequence numbers and forwards events to subscribers. Cheap to
/// clone — clones share the same counter and channel, so tool handlers can
/// emit alongside the engine without racing on sequence assignment (the
/// counter itself is atomic; the channel serializes delivery order as each
/// `emit` completes before the next one is observable by a receiver).
#[derive(Clone)]
pub struct EventEmitter {
    sequence: Arc<AtomicU64>,
    tx: mpsc::Sender<SequencedEvent>,
}

impl EventEmitter {
    pub fn new(tx: mpsc::Sender<SequencedEvent>) -> Self {
        Self {
            sequence: Arc::new(AtomicU64::new(0)),
            tx,
        }
    }

    /// Emit an event, assigning it the next sequence number. Silently
    /// dropped if every receiver has gone away.
    pub async fn emit(&self, event: EngineEvent) {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst);
        if self.tx.send(SequencedEvent { sequence, event }).await.is_err() {
            debug!("event receiver dropped; discarding engine event");
        }
    }
}

/// Lets `core/tools`' `ToolExecutor` emit `confirmation_required` straight
/// into this stream: wire via `ToolExecutorBuilder::with_event_sink`, passing
/// a clone of the same `EventEmitter` the engine was built with.
#[async_trait::async_trait]
impl agentick_tools::ToolEventSink for EventEmitter {
    async fn confirmation_required(&self, tool_call_id: &str, tool_name: &str, input: &serde_json::Value, reason: Option<&str>) {
        self.emit(EngineEvent::ConfirmationRequired {
            tool_call_id: tool_call_id.to_string(),
            tool_name: tool_name.to_string(),
            input: input.clone(),
            reason: reason.map(str::to_string),
        })
        .await;
    }
}

#[cfg(test)]
#[path = "event.test.rs"]
mod tests;
