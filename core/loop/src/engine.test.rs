use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use agentick_accumulator::StopReason as AdapterStopReason;
use agentick_compiler::CompilerError;
use agentick_tools::ToolExecutor;
use async_trait::async_trait;
use futures::StreamExt;
use futures::stream;
use hyper_sdk::DeltaStream;
use hyper_sdk::ModelInput;

use super::*;

/// Adapter that always replies with one text chunk and, if `with_tool_call`
/// is set, a trailing tool call the request never wires a handler for.
struct ScriptedAdapter {
    with_tool_call: bool,
}

#[async_trait]
impl ModelAdapter for ScriptedAdapter {
    type ProviderInput = ModelInput;
    type ProviderChunk = agentick_accumulator::AdapterDelta;
    type ProviderOutput = ModelInput;

    fn name(&self) -> &str {
        "scripted"
    }

    fn prepare_input(&self, input: ModelInput) -> hyper_sdk::error::Result<Self::ProviderInput> {
        Ok(input)
    }

    async fn execute_stream(&self, _input: Self::ProviderInput) -> hyper_sdk::error::Result<DeltaStream> {
        let mut deltas = vec![agentick_accumulator::AdapterDelta::Text {
            delta: "hi".into(),
            metadata: None,
        }];
        if self.with_tool_call {
            deltas.push(agentick_accumulator::AdapterDelta::ToolCall {
                id: "call_1".into(),
                name: "missing_tool".into(),
                input: serde_json::json!({}),
            });
        }
        deltas.push(agentick_accumulator::AdapterDelta::MessageEnd {
            stop_reason: AdapterStopReason::Stop,
            usage: None,
            model_id: None,
        });
        Ok(stream::iter(deltas).boxed())
    }

    async fn execute(&self, input: Self::ProviderInput) -> hyper_sdk::error::Result<Self::ProviderOutput> {
        Ok(input)
    }

    fn map_chunk(&self, chunk: Self::ProviderChunk) -> Option<agentick_accumulator::AdapterDelta> {
        Some(chunk)
    }
}

struct CountingComponent {
    tick_starts: AtomicUsize,
    tick_ends: AtomicUsize,
    completes: AtomicUsize,
}

impl CountingComponent {
    fn new() -> Self {
        Self {
            tick_starts: AtomicUsize::new(0),
            tick_ends: AtomicUsize::new(0),
            completes: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl agentick_compiler::Component for CountingComponent {
    async fn render(&self, _com: &Com, _tick: &TickState) -> Result<(), CompilerError> {
        Ok(())
    }

    async fn on_tick_start(&self, _com: &Com, _tick: &TickState) {
        self.tick_starts.fetch_add(1, Ordering::SeqCst);
    }

    async fn on_tick_end(&self, _com: &Com, _tick: &TickState) {
        self.tick_ends.fetch_add(1, Ordering::SeqCst);
    }

    async fn on_complete(&self, _com: &Com, _aborted: bool) {
        self.completes.fetch_add(1, Ordering::SeqCst);
    }
}

fn executor(com: Com) -> ToolExecutor {
    ToolExecutor::builder(com, "session-1").build()
}

#[tokio::test]
async fn a_tool_free_response_stops_after_one_tick() {
    let com = Com::new();
    let counter = Arc::new(CountingComponent::new());
    let tree: ComponentTree = vec![counter.clone()];
    let engine = EngineBuilder::new(com.clone(), tree, ScriptedAdapter { with_tool_call: false }, executor(com.clone()))
        .build(EventEmitter::new(tokio::sync::mpsc::channel(64).0));

    let outcome = engine.run().await.expect("run succeeds");

    assert_eq!(outcome.ticks_completed, 1);
    assert!(!outcome.aborted);
    assert_eq!(outcome.stop_reason, StopReason::ContinuationPolicy);
    assert_eq!(counter.tick_starts.load(Ordering::SeqCst), 1);
    assert_eq!(counter.tick_ends.load(Ordering::SeqCst), 1);
    assert_eq!(counter.completes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn tool_calls_keep_the_engine_running_until_max_ticks() {
    let com = Com::new();
    let tree: ComponentTree = vec![];
    let engine = EngineBuilder::new(com.clone(), tree, ScriptedAdapter { with_tool_call: true }, executor(com.clone()))
        .config(EngineConfig {
            max_ticks: 3,
            max_compile_iterations: 5,
        })
        .build(EventEmitter::new(tokio::sync::mpsc::channel(64).0));

    let outcome = engine.run().await.expect("run succeeds");

    assert_eq!(outcome.ticks_completed, 3);
    assert_eq!(outcome.stop_reason, StopReason::MaxTicksReached);
    assert!(!outcome.aborted);
    // Each tick appends one assistant message, one tool_use, one tool_result.
    assert_eq!(outcome.new_timeline_entries.len(), 9);
}

#[tokio::test]
async fn a_pre_cancelled_token_aborts_before_any_tick_runs() {
    let com = Com::new();
    let tree: ComponentTree = vec![];
    let token = CancellationToken::new();
    token.cancel();
    let engine = EngineBuilder::new(com.clone(), tree, ScriptedAdapter { with_tool_call: false }, executor(com.clone()))
        .cancel_token(token)
        .build(EventEmitter::new(tokio::sync::mpsc::channel(64).0));

    let outcome = engine.run().await.expect("run succeeds");

    assert_eq!(outcome.ticks_completed, 0);
    assert!(outcome.aborted);
    assert_eq!(outcome.stop_reason, StopReason::Aborted);
}

#[tokio::test]
async fn a_queued_message_lands_in_the_timeline_on_the_next_tick() {
    let com = Com::new();
    let tree: ComponentTree = vec![];
    let engine = EngineBuilder::new(com.clone(), tree, ScriptedAdapter { with_tool_call: false }, executor(com.clone()))
        .build(EventEmitter::new(tokio::sync::mpsc::channel(64).0));

    engine.send_message(Role::User, vec![]).await;
    let _ = engine.run().await.expect("run succeeds");

    let timeline = com.timeline().await;
    assert!(timeline.iter().any(|entry| matches!(entry, TimelineEntry::Message { role: Role::User, .. })));
}
