//! Lifecycle events emitted by the accumulator as it processes deltas.

use serde_json::Value;

use crate::block::BlockMetadata;
use crate::delta::StopReason;
use crate::delta::Usage;

/// A lifecycle event emitted in response to a single pushed delta (or, for
/// synthetic finalization at `message_end`, in response to no delta at all).
///
/// Events are emitted in the order described by §4.3's transition rules and
/// satisfy invariants 1 and 2 of §8: every `ContentStart`/`ReasoningStart`
/// has exactly one matching `*End` and one full-block event, and every
/// `ToolCallStart` eventually gets a `ToolCallEnd` + `ToolCall`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LifecycleEvent {
    MessageStart,

    ContentStart {
        block_index: u64,
    },
    ContentDelta {
        block_index: u64,
        delta: String,
    },
    ContentEnd {
        block_index: u64,
    },
    Content {
        block_index: u64,
        text: String,
        metadata: BlockMetadata,
    },

    ReasoningStart {
        block_index: u64,
    },
    ReasoningDelta {
        block_index: u64,
        delta: String,
    },
    ReasoningEnd {
        block_index: u64,
    },
    Reasoning {
        block_index: u64,
        text: String,
        metadata: BlockMetadata,
    },

    ToolCallStart {
        block_index: u64,
        id: String,
        name: String,
    },
    ToolCallDelta {
        block_index: u64,
        id: String,
        delta: String,
    },
    ToolCallEnd {
        block_index: u64,
        id: String,
        input: Value,
    },
    ToolCall {
        block_index: u64,
        id: String,
        name: String,
        input: Value,
    },

    MessageEnd {
        stop_reason: StopReason,
        usage: Usage,
        model_id: Option<String>,
    },

    Error {
        message: String,
    },
}
