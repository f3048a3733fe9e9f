//! The `Component` contract (§4.2): the unit the compiler evaluates.
//!
//! Rust-native shape of the spec's "opaque component tree" — a trait
//! object evaluated leaves-first, the way `core/prompt`'s section builder
//! assembles ordered prompt sections, generalized into an
//! iterate-until-stable loop.

use std::collections::HashMap;

use agentick_com::Com;
use agentick_com::TickState;
use async_trait::async_trait;
use serde_json::Value;

use crate::error::CompilerError;
use crate::structure::CompiledStructure;

/// One pass's position within `compile_until_stable` (§4.2), handed to
/// `on_after_compile` hooks.
#[derive(Debug, Clone, Copy)]
pub struct PassInfo {
    /// 0-indexed pass number.
    pub iteration: u32,
    pub max_iterations: u32,
}

/// Which part of the engine's tick an error was raised from (§7 Tier 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPhase {
    Render,
    ModelExecution,
    ToolExecution,
    TickStart,
    TickEnd,
    Complete,
    Unknown,
}

impl std::fmt::Display for ErrorPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorPhase::Render => "render",
            ErrorPhase::ModelExecution => "model_execution",
            ErrorPhase::ToolExecution => "tool_execution",
            ErrorPhase::TickStart => "tick_start",
            ErrorPhase::TickEnd => "tick_end",
            ErrorPhase::Complete => "complete",
            ErrorPhase::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// A Tier-2 engine-phase error (§7), handed to `Component::on_error`.
/// Carries the failing error's rendered message rather than the engine's
/// own error type, so this crate never needs to depend back on `core/loop`.
#[derive(Debug, Clone)]
pub struct EngineErrorReport {
    pub error: String,
    pub phase: ErrorPhase,
    pub recoverable: bool,
    pub context: Value,
}

/// What a component's `on_error` hook decided (§7): whether to continue the
/// execution past this error, an optional message to append to the
/// timeline as a system entry, and optional COM state writes to apply
/// before continuing.
#[derive(Debug, Clone, Default)]
pub struct RecoveryAction {
    pub continue_execution: bool,
    pub recovery_message: Option<String>,
    pub modifications: Option<HashMap<String, Value>>,
}

/// A node in the component tree. Implementors mutate the COM during
/// `render` (append sections, register tools, request a recompile) and may
/// optionally inspect the structure a pass produced via `on_after_compile`.
#[async_trait]
pub trait Component: Send + Sync {
    /// Evaluate this component against the current COM and tick state.
    /// Errors are captured by the compiler with `phase=render` and discard
    /// the in-flight pass (§4.2 failure semantics).
    async fn render(&self, com: &Com, tick: &TickState) -> Result<(), CompilerError>;

    /// Called once per pass, after every component in the tree has
    /// rendered and the pass's structure has been captured. Implementors
    /// may call `com.request_recompile` here to force another pass.
    ///
    /// Default: no-op.
    async fn on_after_compile(&self, _compiled: &CompiledStructure, _tick: &TickState, _pass: PassInfo) {}

    /// Called once per tick (§4.6 step 2), before any compile pass runs.
    /// Default: no-op.
    async fn on_tick_start(&self, _com: &Com, _tick: &TickState) {}

    /// Called once per tick (§4.6 step 8), after the model response and
    /// any tool calls have been appended to the timeline. Default: no-op.
    async fn on_tick_end(&self, _com: &Com, _tick: &TickState) {}

    /// Called once, when the engine stops ticking (§4.6 step 10) — whether
    /// because the continuation policy said stop, `maxTicks` was reached,
    /// or the session was aborted. Default: no-op.
    async fn on_complete(&self, _com: &Com, _aborted: bool) {}

    /// Called for a Tier-2 engine-phase error (§7), in registration order,
    /// until one component returns `Some(RecoveryAction)`. Returning `None`
    /// (the default) declines to recover and defers to the next component;
    /// if every component declines, the error propagates and the execution
    /// terminates.
    async fn on_error(&self, _com: &Com, _tick: &TickState, _error: &EngineErrorReport) -> Option<RecoveryAction> {
        None
    }

    /// A stable name for diagnostics (error messages, tracing spans).
    /// Default: the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// An ordered sequence of components, evaluated leaf-first on each pass.
pub type ComponentTree = Vec<std::sync::Arc<dyn Component>>;
