//! Tick state (§3 "Tick state"): one per tick, consumed by the engine and
//! exposed to components during that tick, then frozen for history.

use agentick_accumulator::StopReason;
use agentick_accumulator::Usage;

use crate::com::ComInput;
use crate::timeline::TimelineEntry;

/// A message delivered via `sendMessage` while a tick was in flight; queued
/// and exposed to the *next* tick (§5 ordering guarantees).
#[derive(Debug, Clone)]
pub struct QueuedMessage {
    pub role: hyper_sdk::Role,
    pub content: Vec<agentick_accumulator::ContentBlock>,
}

/// What the current tick has produced so far, populated incrementally as
/// the engine runs through §4.6's steps.
#[derive(Debug, Clone, Default)]
pub struct TickOutput {
    pub assistant_entries: Vec<TimelineEntry>,
    pub tool_entries: Vec<TimelineEntry>,
    pub stop_reason: Option<StopReason>,
    pub usage: Usage,
}

/// Non-fatal record of an engine-phase error for this tick (§7 Tier 2),
/// surfaced to components via `on_error` hooks but not necessarily fatal.
#[derive(Debug, Clone)]
pub struct TickErrorRecord {
    pub phase: String,
    pub message: String,
    pub recoverable: bool,
}

/// One iteration of the engine's execution loop (§3 lifecycles, §4.6).
#[derive(Debug, Clone)]
pub struct TickState {
    /// 1-indexed tick number within the current execution.
    pub tick: u64,
    /// Compiled input sent to the model last tick; `None` on tick 1.
    pub previous: Option<ComInput>,
    /// This tick's output, populated incrementally.
    pub current: TickOutput,
    pub queued_messages: Vec<QueuedMessage>,
    pub error: Option<TickErrorRecord>,
    pub aborted: bool,
}

impl TickState {
    pub fn new(tick: u64, previous: Option<ComInput>, queued_messages: Vec<QueuedMessage>) -> Self {
        Self {
            tick,
            previous,
            current: TickOutput::default(),
            queued_messages,
            error: None,
            aborted: false,
        }
    }
}
