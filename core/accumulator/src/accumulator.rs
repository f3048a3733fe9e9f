//! The accumulator state machine (§4.3).

use std::collections::HashMap;

use serde_json::Value;
use tracing::trace;
use tracing::warn;

use crate::block::BlockMetadata;
use crate::block::CompletedToolCall;
use crate::delta::AdapterDelta;
use crate::delta::StopReason;
use crate::delta::Usage;
use crate::event::LifecycleEvent;

#[derive(Debug, Clone, Default)]
struct InProgressToolCall {
    name: String,
    block_index: u64,
    input_json: String,
}

/// Final assembled assistant message, in the order §4.3 prescribes:
/// `[reasoning?, text?, tool_use*]`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AccumulatedMessage {
    pub reasoning: Option<String>,
    pub reasoning_metadata: BlockMetadata,
    pub text: Option<String>,
    pub text_metadata: BlockMetadata,
    pub tool_calls: Vec<CompletedToolCall>,
    pub usage: Usage,
    pub stop_reason: StopReason,
    pub model_id: Option<String>,
}

/// One accumulator instance per model invocation (one per tick, §3
/// lifecycles). Pure state — `push` is the only mutator, `to_model_output`
/// is side-effect free and may be called any number of times.
#[derive(Debug, Default)]
pub struct Accumulator {
    message_started: bool,

    text_started: bool,
    text_block_index: Option<u64>,
    reasoning_started: bool,
    reasoning_block_index: Option<u64>,

    next_block_index: u64,

    tool_call_order: Vec<String>,
    tool_calls: HashMap<String, InProgressToolCall>,

    text: String,
    reasoning: String,
    current_block_text: String,
    current_reasoning_text: String,
    content_metadata: BlockMetadata,
    reasoning_metadata: BlockMetadata,
    final_text_metadata: BlockMetadata,
    final_reasoning_metadata: BlockMetadata,

    completed_tool_calls: Vec<CompletedToolCall>,
    usage: Usage,
    stop_reason: StopReason,
    model_id: Option<String>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_block_index(&mut self) -> u64 {
        let idx = self.next_block_index;
        self.next_block_index += 1;
        idx
    }

    fn ensure_message_started(&mut self, events: &mut Vec<LifecycleEvent>) {
        if !self.message_started {
            self.message_started = true;
            events.push(LifecycleEvent::MessageStart);
        }
    }

    fn close_text_block(&mut self, events: &mut Vec<LifecycleEvent>) {
        if self.text_started {
            let block_index = self.text_block_index.take().unwrap_or_default();
            events.push(LifecycleEvent::ContentEnd { block_index });
            events.push(LifecycleEvent::Content {
                block_index,
                text: std::mem::take(&mut self.current_block_text),
                metadata: self.content_metadata.clone(),
            });
            self.final_text_metadata.merge(&self.content_metadata);
            self.content_metadata = BlockMetadata::default();
            self.text_started = false;
        }
    }

    fn close_reasoning_block(&mut self, events: &mut Vec<LifecycleEvent>) {
        if self.reasoning_started {
            let block_index = self.reasoning_block_index.take().unwrap_or_default();
            events.push(LifecycleEvent::ReasoningEnd { block_index });
            events.push(LifecycleEvent::Reasoning {
                block_index,
                text: std::mem::take(&mut self.current_reasoning_text),
                metadata: self.reasoning_metadata.clone(),
            });
            self.final_reasoning_metadata.merge(&self.reasoning_metadata);
            self.reasoning_metadata = BlockMetadata::default();
            self.reasoning_started = false;
        }
    }

    fn close_active_blocks(&mut self, events: &mut Vec<LifecycleEvent>) {
        self.close_text_block(events);
        self.close_reasoning_block(events);
    }

    fn parse_tool_input(raw: &str) -> Value {
        if raw.is_empty() {
            return Value::Object(serde_json::Map::new());
        }
        match serde_json::from_str::<Value>(raw) {
            Ok(v) => v,
            Err(_) => {
                warn!(raw_len = raw.len(), "tool call arguments failed to parse as JSON, falling back to raw passthrough");
                serde_json::json!({ "raw": raw })
            }
        }
    }

    fn finalize_tool_call(&mut self, id: &str, input: Value, events: &mut Vec<LifecycleEvent>) {
        let Some(in_progress) = self.tool_calls.remove(id) else {
            return;
        };
        self.tool_call_order.retain(|existing| existing != id);
        events.push(LifecycleEvent::ToolCallEnd {
            block_index: in_progress.block_index,
            id: id.to_string(),
            input: input.clone(),
        });
        events.push(LifecycleEvent::ToolCall {
            block_index: in_progress.block_index,
            id: id.to_string(),
            name: in_progress.name.clone(),
            input: input.clone(),
        });
        self.completed_tool_calls.push(CompletedToolCall {
            id: id.to_string(),
            name: in_progress.name,
            input,
        });
    }

    /// Push one normalized delta and return the lifecycle events it produced,
    /// in emission order.
    pub fn push(&mut self, delta: AdapterDelta) -> Vec<LifecycleEvent> {
        let mut events = Vec::new();
        match delta {
            AdapterDelta::MessageStart => {
                self.ensure_message_started(&mut events);
            }
            AdapterDelta::Text { delta, metadata } => {
                self.ensure_message_started(&mut events);
                if self.reasoning_started {
                    self.close_reasoning_block(&mut events);
                }
                if !self.text_started {
                    let idx = self.alloc_block_index();
                    self.text_block_index = Some(idx);
                    events.push(LifecycleEvent::ContentStart { block_index: idx });
                    self.text_started = true;
                }
                if let Some(meta) = metadata {
                    self.content_metadata.merge(&meta);
                }
                self.text.push_str(&delta);
                self.current_block_text.push_str(&delta);
                let block_index = self.text_block_index.unwrap_or_default();
                events.push(LifecycleEvent::ContentDelta { block_index, delta });
            }
            AdapterDelta::Reasoning { delta, metadata } => {
                self.ensure_message_started(&mut events);
                if self.text_started {
                    self.close_text_block(&mut events);
                }
                if !self.reasoning_started {
                    let idx = self.alloc_block_index();
                    self.reasoning_block_index = Some(idx);
                    events.push(LifecycleEvent::ReasoningStart { block_index: idx });
                    self.reasoning_started = true;
                }
                if let Some(meta) = metadata {
                    self.reasoning_metadata.merge(&meta);
                }
                self.reasoning.push_str(&delta);
                self.current_reasoning_text.push_str(&delta);
                let block_index = self.reasoning_block_index.unwrap_or_default();
                events.push(LifecycleEvent::ReasoningDelta { block_index, delta });
            }
            AdapterDelta::ContentMetadata(meta) => {
                self.content_metadata.merge(&meta);
            }
            AdapterDelta::ReasoningMetadata(meta) => {
                self.reasoning_metadata.merge(&meta);
            }
            AdapterDelta::ToolCallStart { id, name } => {
                self.ensure_message_started(&mut events);
                self.close_active_blocks(&mut events);
                let idx = self.alloc_block_index();
                self.tool_call_order.push(id.clone());
                self.tool_calls.insert(
                    id.clone(),
                    InProgressToolCall {
                        name: name.clone(),
                        block_index: idx,
                        input_json: String::new(),
                    },
                );
                events.push(LifecycleEvent::ToolCallStart {
                    block_index: idx,
                    id,
                    name,
                });
            }
            AdapterDelta::ToolCallDelta { id, delta } => {
                let entry = self.tool_calls.entry(id.clone()).or_insert_with(|| {
                    self.tool_call_order.push(id.clone());
                    InProgressToolCall {
                        name: String::new(),
                        block_index: 0,
                        input_json: String::new(),
                    }
                });
                entry.input_json.push_str(&delta);
                let block_index = entry.block_index;
                events.push(LifecycleEvent::ToolCallDelta {
                    block_index,
                    id,
                    delta,
                });
            }
            AdapterDelta::ToolCallEnd { id, input } => {
                let input = match input {
                    Some(v) => v,
                    None => {
                        let raw = self
                            .tool_calls
                            .get(&id)
                            .map(|tc| tc.input_json.clone())
                            .unwrap_or_default();
                        Self::parse_tool_input(&raw)
                    }
                };
                self.finalize_tool_call(&id, input, &mut events);
            }
            AdapterDelta::ToolCall { id, name, input } => {
                self.ensure_message_started(&mut events);
                self.close_active_blocks(&mut events);
                let idx = self.alloc_block_index();
                events.push(LifecycleEvent::ToolCall {
                    block_index: idx,
                    id: id.clone(),
                    name: name.clone(),
                    input: input.clone(),
                });
                self.completed_tool_calls
                    .push(CompletedToolCall { id, name, input });
            }
            AdapterDelta::Usage(usage) => {
                self.usage.merge_max(&usage);
            }
            AdapterDelta::MessageEnd {
                stop_reason,
                usage,
                model_id,
            } => {
                self.close_active_blocks(&mut events);
                // Finalize any tool calls the provider never explicitly
                // terminated (§4.3 message_end rule, §8 invariant 2).
                let pending: Vec<String> = self.tool_call_order.clone();
                for id in pending {
                    let raw = self
                        .tool_calls
                        .get(&id)
                        .map(|tc| tc.input_json.clone())
                        .unwrap_or_default();
                    let input = Self::parse_tool_input(&raw);
                    self.finalize_tool_call(&id, input, &mut events);
                }
                if let Some(u) = usage {
                    self.usage.merge_max(&u);
                }
                self.stop_reason = stop_reason;
                if model_id.is_some() {
                    self.model_id = model_id;
                }
                events.push(LifecycleEvent::MessageEnd {
                    stop_reason: self.stop_reason,
                    usage: self.usage,
                    model_id: self.model_id.clone(),
                });
            }
            AdapterDelta::Error(message) => {
                events.push(LifecycleEvent::Error { message });
            }
            AdapterDelta::Raw(value) => {
                // Open question (see DESIGN.md): origin does not specify how
                // raw passthrough deltas map onto lifecycle events. We record
                // them without emitting an event, since §6's grammar has no
                // raw-delta production; they remain available for debugging
                // via tracing only.
                trace!(?value, "raw provider passthrough delta (not surfaced as a lifecycle event)");
            }
        }
        events
    }

    /// Assemble the final assistant message. Side-effect free; may be called
    /// repeatedly with no intervening `push` and returns an equal value each
    /// time (§8 round-trip property).
    pub fn to_model_output(&self) -> AccumulatedMessage {
        AccumulatedMessage {
            reasoning: if self.reasoning.is_empty() {
                None
            } else {
                Some(self.reasoning.clone())
            },
            reasoning_metadata: self.final_reasoning_metadata.clone(),
            text: if self.text.is_empty() {
                None
            } else {
                Some(self.text.clone())
            },
            text_metadata: self.final_text_metadata.clone(),
            tool_calls: self.completed_tool_calls.clone(),
            usage: self.usage,
            stop_reason: self.stop_reason,
            model_id: self.model_id.clone(),
        }
    }
}

#[cfg(test)]
#[path = "accumulator.test.rs"]
mod tests;
