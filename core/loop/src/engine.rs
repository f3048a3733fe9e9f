//! The Engine/Tick Loop (§4.6): drives a component tree against a model
//! adapter, tick by tick, until the continuation policy (§4.7) or
//! `max_ticks` says stop.
//!
//! Generic over the model adapter rather than boxing it behind a trait
//! object: [`hyper_sdk::ModelAdapter`] carries associated types, so a
//! `dyn`-compatible wrapper would have to re-erase them anyway. Monomorphizing
//! per adapter matches how `core/tools`' executor is built against concrete
//! bridges rather than a universal one.

use std::sync::Arc;

use agentick_accumulator::Accumulator;
use agentick_accumulator::ContentBlock;
use agentick_com::Com;
use agentick_com::TickErrorRecord;
use agentick_com::TickState;
use agentick_com::TimelineEntry;
use agentick_compiler::ComponentTree;
use agentick_compiler::EngineErrorReport;
use agentick_compiler::compile_until_stable;
use agentick_tools::ToolExecutor;
use futures::StreamExt;
use hyper_sdk::ModelAdapter;
use hyper_sdk::Role;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::instrument;
use tracing::warn;

use crate::continuation::ContinuationCallback;
use crate::continuation::apply_continuation_policy;
use crate::error::CompileFailedSnafu;
use crate::error::EngineError;
use crate::error::ModelExecuteFailedSnafu;
use crate::error::ModelPrepareFailedSnafu;
use crate::event::EngineEvent;
use crate::event::EventEmitter;
use crate::projection::build_model_input;
use crate::result::ExecutionOutcome;
use crate::result::StopReason;

/// Bounds on one execution (§4.6 step 10, §4.2).
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Hard ceiling on ticks per execution, regardless of the continuation
    /// policy (§4.6 step 10).
    pub max_ticks: u64,
    /// `max_iterations` handed to `compile_until_stable` each tick (§4.2).
    pub max_compile_iterations: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_ticks: 50,
            max_compile_iterations: 10,
        }
    }
}

/// A message delivered to a running execution via [`Engine::send_message`]
/// while a tick is in flight (§5: "external `sendMessage` during a tick
/// queues for next tick's `queuedMessages`"); drained at the next tick's
/// step 1.
struct QueuedMessage {
    role: Role,
    content: Vec<ContentBlock>,
}

/// Drives a component tree against a model adapter (§4.6). One `Engine`
/// per execution; construct via [`EngineBuilder`].
pub struct Engine<A: ModelAdapter> {
    com: Com,
    tree: ComponentTree,
    adapter: A,
    executor: ToolExecutor,
    config: EngineConfig,
    continuation_callbacks: Vec<ContinuationCallback>,
    events: EventEmitter,
    cancel_token: CancellationToken,
    queue: Arc<Mutex<Vec<QueuedMessage>>>,
}

/// Builder for [`Engine`], mirroring `ToolExecutorBuilder`'s shape
/// (required fields up front, optional knobs via chained setters).
pub struct EngineBuilder<A: ModelAdapter> {
    com: Com,
    tree: ComponentTree,
    adapter: A,
    executor: ToolExecutor,
    config: EngineConfig,
    continuation_callbacks: Vec<ContinuationCallback>,
    cancel_token: CancellationToken,
}

impl<A: ModelAdapter> EngineBuilder<A> {
    pub fn new(com: Com, tree: ComponentTree, adapter: A, executor: ToolExecutor) -> Self {
        Self {
            com,
            tree,
            adapter,
            executor,
            config: EngineConfig::default(),
            continuation_callbacks: Vec::new(),
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers a `useContinuation` callback (§4.7), called in
    /// registration order.
    pub fn with_continuation(mut self, callback: ContinuationCallback) -> Self {
        self.continuation_callbacks.push(callback);
        self
    }

    pub fn cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    pub fn build(self, events: EventEmitter) -> Engine<A> {
        Engine {
            com: self.com,
            tree: self.tree,
            adapter: self.adapter,
            executor: self.executor,
            config: self.config,
            continuation_callbacks: self.continuation_callbacks,
            events,
            cancel_token: self.cancel_token,
            queue: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Assembles a final assistant message's content blocks in the order §4.3
/// prescribes: `[reasoning?, text?, tool_use*]`. Block indices are assigned
/// here rather than carried over from the accumulator, since
/// `AccumulatedMessage` only keeps the merged text/metadata, not the
/// streamed block indices.
fn assembled_to_blocks(message: &agentick_accumulator::AccumulatedMessage) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    let mut index = 0u64;
    if let Some(text) = &message.reasoning {
        blocks.push(ContentBlock::Reasoning {
            block_index: index,
            text: text.clone(),
            metadata: message.reasoning_metadata.clone(),
        });
        index += 1;
    }
    if let Some(text) = &message.text {
        blocks.push(ContentBlock::Text {
            block_index: index,
            text: text.clone(),
            metadata: message.text_metadata.clone(),
        });
        index += 1;
    }
    for call in &message.tool_calls {
        blocks.push(ContentBlock::ToolUse {
            block_index: index,
            id: call.id.clone(),
            name: call.name.clone(),
            input: call.input.clone(),
        });
        index += 1;
    }
    blocks
}

impl<A: ModelAdapter> Engine<A> {
    /// Queues a message for the next tick's `queuedMessages`, appending it
    /// to the timeline immediately so it participates in the next compile
    /// pass (§5: queuing never interrupts the tick in flight, only defers
    /// visibility to the following one).
    pub async fn send_message(&self, role: Role, content: Vec<ContentBlock>) {
        self.queue.lock().await.push(QueuedMessage { role, content });
    }

    /// Signals abort. The in-flight model stream is interrupted at its next
    /// yield point; `on_tick_end`/`on_complete`/`execution_end` still run
    /// with `aborted=true` (§5 cancellation semantics).
    pub fn abort(&self) {
        self.cancel_token.cancel();
    }

    /// Handles a Tier-2 engine-phase error (§7): records it on the tick,
    /// then invokes each component's `on_error` hook in registration order
    /// until one returns a recovery. A recovering component's
    /// `modifications` are applied to the COM and its `recovery_message`
    /// (if any) is appended as a system timeline entry; the tick then
    /// proceeds as if it produced no tool calls. If no component recovers,
    /// or the first one to respond declines to continue, the original
    /// error is returned for `run` to propagate.
    async fn handle_tier2_error(&self, tick: &mut TickState, err: EngineError) -> Result<bool, EngineError> {
        let phase = err.phase();
        let report = EngineErrorReport {
            error: err.to_string(),
            phase,
            recoverable: true,
            context: serde_json::json!({ "tick": err.tick() }),
        };
        tick.error = Some(TickErrorRecord {
            phase: phase.to_string(),
            message: report.error.clone(),
            recoverable: report.recoverable,
        });

        let mut recovery = None;
        for component in &self.tree {
            if let Some(action) = component.on_error(&self.com, tick, &report).await {
                recovery = Some(action);
                break;
            }
        }

        let Some(action) = recovery else {
            return Err(err);
        };
        if !action.continue_execution {
            return Err(err);
        }
        if let Some(modifications) = action.modifications {
            for (key, value) in modifications {
                self.com.set_state(key, value).await;
            }
        }
        if let Some(message) = action.recovery_message {
            let entry = TimelineEntry::message(Role::System, vec![agentick_tools::text_block(message)]);
            self.com.append_timeline(entry).await;
        }
        Ok(false)
    }

    /// Runs the engine to completion: repeats §4.6's 10-step tick until the
    /// continuation policy stops it, `max_ticks` is reached, or the
    /// execution is aborted.
    #[instrument(skip_all)]
    pub async fn run(&self) -> Result<ExecutionOutcome, EngineError> {
        let execution_start_len = self.com.timeline_len().await;
        let mut tick_num: u64 = 0;
        let mut previous_input = None;
        let mut aborted = false;
        let mut stop_reason = StopReason::ContinuationPolicy;

        loop {
            if self.cancel_token.is_cancelled() {
                aborted = true;
                stop_reason = StopReason::Aborted;
                break;
            }
            tick_num += 1;

            // Step 1: snapshot queued messages and fold them into the
            // timeline so this tick's compile pass sees them.
            let snapshot = std::mem::take(&mut *self.queue.lock().await);
            let queued_messages = snapshot
                .iter()
                .map(|m| agentick_com::QueuedMessage {
                    role: m.role,
                    content: m.content.clone(),
                })
                .collect();
            for message in snapshot {
                self.com.append_timeline(TimelineEntry::message(message.role, message.content)).await;
            }
            let mut tick = TickState::new(tick_num, previous_input.clone(), queued_messages);

            self.events.emit(EngineEvent::TickStart { tick: tick_num }).await;

            // Step 2.
            for component in &self.tree {
                component.on_tick_start(&self.com, &tick).await;
            }

            // Step 3. A compile failure is Tier 2 (§7): give components a
            // chance to recover before this tick gives up on a model call.
            let had_tool_calls = match compile_until_stable(&self.tree, &self.com, &tick, self.config.max_compile_iterations).await {
                Err(err) => {
                    let engine_err = CompileFailedSnafu {
                        tick: tick_num,
                        message: err.to_string(),
                    }
                    .build();
                    self.handle_tier2_error(&mut tick, engine_err).await?
                }
                Ok(_compiled) => {
                    // Step 4.
                    let com_input = self.com.to_input().await;
                    let model_input = self.adapter.from_engine_state(build_model_input(&com_input));
                    previous_input = Some(com_input);
                    match self.adapter.prepare_input(model_input) {
                        Err(err) => {
                            let engine_err = ModelPrepareFailedSnafu {
                                tick: tick_num,
                                message: err.to_string(),
                            }
                            .build();
                            self.handle_tier2_error(&mut tick, engine_err).await?
                        }
                        Ok(provider_input) => {
                            // Step 5.
                            match self.adapter.execute_stream(provider_input).await {
                                Err(err) => {
                                    let engine_err = ModelExecuteFailedSnafu {
                                        tick: tick_num,
                                        message: err.to_string(),
                                    }
                                    .build();
                                    self.handle_tier2_error(&mut tick, engine_err).await?
                                }
                                Ok(mut stream) => {
                                    let mut accumulator = Accumulator::new();
                                    let mut stream_aborted = false;
                                    while let Some(chunk) = stream.next().await {
                                        if self.cancel_token.is_cancelled() {
                                            stream_aborted = true;
                                            break;
                                        }
                                        if let Some(delta) = self.adapter.map_chunk(chunk) {
                                            for event in accumulator.push(delta) {
                                                self.events.emit(EngineEvent::Stream(event)).await;
                                            }
                                        }
                                    }

                                    if stream_aborted {
                                        tick.aborted = true;
                                        aborted = true;
                                        false
                                    } else {
                                        // Step 6.
                                        let assembled = accumulator.to_model_output();
                                        let assistant_content = assembled_to_blocks(&assembled);
                                        tick.current.stop_reason = Some(assembled.stop_reason);
                                        tick.current.usage = assembled.usage;
                                        let assistant_entry = TimelineEntry::message(Role::Assistant, assistant_content);
                                        self.com.append_timeline(assistant_entry.clone()).await;
                                        tick.current.assistant_entries.push(assistant_entry);

                                        // Step 7.
                                        let had_tool_calls = !assembled.tool_calls.is_empty();
                                        if had_tool_calls {
                                            for call in &assembled.tool_calls {
                                                self.events
                                                    .emit(EngineEvent::ToolCallStart {
                                                        id: call.id.clone(),
                                                        name: call.name.clone(),
                                                    })
                                                    .await;
                                                let entry =
                                                    TimelineEntry::tool_use(call.id.clone(), call.name.clone(), call.input.clone());
                                                self.com.append_timeline(entry.clone()).await;
                                                tick.current.tool_entries.push(entry);
                                            }
                                            let results = self.executor.execute_tool_calls(assembled.tool_calls).await;
                                            for result_entry in results {
                                                if let TimelineEntry::ToolResult { tool_use_id, success, .. } = &result_entry {
                                                    self.events
                                                        .emit(EngineEvent::ToolCallEnd { id: tool_use_id.clone() })
                                                        .await;
                                                    self.com.append_timeline(result_entry.clone()).await;
                                                    self.events
                                                        .emit(EngineEvent::ToolResult {
                                                            tool_use_id: tool_use_id.clone(),
                                                            success: *success,
                                                        })
                                                        .await;
                                                } else {
                                                    warn!("tool executor returned a non-ToolResult entry; dropping it");
                                                }
                                                tick.current.tool_entries.push(result_entry);
                                            }
                                        }
                                        had_tool_calls
                                    }
                                }
                            }
                        }
                    }
                }
            };

            // Step 8.
            for component in &self.tree {
                component.on_tick_end(&self.com, &tick).await;
            }
            let seed = had_tool_calls;
            let effective_should_continue =
                apply_continuation_policy(&self.continuation_callbacks, &tick, &self.com, seed).await;

            // Step 9/10.
            self.events
                .emit(EngineEvent::TickEnd {
                    tick: tick_num,
                    aborted: tick.aborted,
                })
                .await;

            if tick.aborted {
                stop_reason = StopReason::Aborted;
                break;
            }
            if !effective_should_continue {
                stop_reason = StopReason::ContinuationPolicy;
                break;
            }
            if tick_num >= self.config.max_ticks {
                stop_reason = StopReason::MaxTicksReached;
                break;
            }
        }

        for component in &self.tree {
            component.on_complete(&self.com, aborted).await;
        }

        let new_timeline_entries: Vec<TimelineEntry> =
            self.com.timeline().await.into_iter().skip(execution_start_len).collect();
        self.events
            .emit(EngineEvent::ExecutionEnd {
                new_timeline_entries: new_timeline_entries.clone(),
                aborted,
            })
            .await;

        Ok(ExecutionOutcome {
            ticks_completed: tick_num,
            aborted,
            stop_reason,
            new_timeline_entries,
        })
    }
}

#[cfg(test)]
#[path = "engine.test.rs"]
mod tests;
