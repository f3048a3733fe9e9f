//! Normalized delta alphabet consumed by the [`crate::Accumulator`].
//!
//! Provider adapters translate their own wire format into this alphabet
//! before pushing events into the accumulator; nothing in this crate knows
//! about any specific model provider.

use serde_json::Value;

use crate::block::BlockMetadata;

/// Token/latency usage reported by the model, merged by max-per-field as
/// deltas arrive (never decreasing).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Usage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
}

impl Usage {
    /// Merge by taking the max of each field — usage is cumulative and must
    /// never be allowed to regress as more deltas arrive.
    pub fn merge_max(&mut self, other: &Usage) {
        self.input_tokens = self.input_tokens.max(other.input_tokens);
        self.output_tokens = self.output_tokens.max(other.output_tokens);
        self.total_tokens = self.total_tokens.max(other.total_tokens);
    }
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Stop,
    ToolUse,
    MaxTokens,
    ContentFilter,
    Aborted,
    Unspecified,
}

impl Default for StopReason {
    fn default() -> Self {
        StopReason::Unspecified
    }
}

/// A single normalized event pushed into the accumulator.
///
/// This is the "input alphabet" of §4.3: `message_start`, `text`,
/// `reasoning`, `content_metadata`, `reasoning_metadata`, `tool_call_start`,
/// `tool_call_delta`, `tool_call_end`, `tool_call` (non-streamed), `usage`,
/// `message_end`, `error`, `raw`.
#[derive(Debug, Clone)]
pub enum AdapterDelta {
    MessageStart,
    Text {
        delta: String,
        metadata: Option<BlockMetadata>,
    },
    Reasoning {
        delta: String,
        metadata: Option<BlockMetadata>,
    },
    ContentMetadata(BlockMetadata),
    ReasoningMetadata(BlockMetadata),
    ToolCallStart {
        id: String,
        name: String,
    },
    ToolCallDelta {
        id: String,
        delta: String,
    },
    ToolCallEnd {
        id: String,
        input: Option<Value>,
    },
    /// A complete, non-streamed tool call (the adapter received it whole).
    ToolCall {
        id: String,
        name: String,
        input: Value,
    },
    Usage(Usage),
    MessageEnd {
        stop_reason: StopReason,
        usage: Option<Usage>,
        model_id: Option<String>,
    },
    /// A provider-level error mid-stream. Recorded but does not panic the
    /// accumulator; the engine decides how to surface it.
    Error(String),
    /// Opaque provider passthrough that doesn't map to any other variant.
    Raw(Value),
}
