//! The Context Object Model itself (§4.1).

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tokio::sync::broadcast;

use crate::control::ControlRequest;
use crate::control::resolve_should_continue;
use crate::error::Result;
use crate::event::ComEvent;
use crate::event::StateChanged;
use crate::section::Audience;
use crate::section::Section;
use crate::section::SectionRegistry;
use crate::section::UpsertOutcome;
use crate::timeline::TimelineEntry;
use crate::tool::ToolMetadata;
use crate::tool::ToolRegistry;

/// Default token estimator: `⌈len/4⌉ + 4` (§4.1).
pub fn default_token_estimator(s: &str) -> usize {
    s.len().div_ceil(4) + 4
}

/// The flattened view the compiler/engine hands to a model adapter
/// (§4.1 `to_input()`).
#[derive(Debug, Clone)]
pub struct ComInput {
    pub timeline: Vec<TimelineEntry>,
    pub system_entries: Vec<String>,
    pub sections: Vec<Section>,
    pub tools: Vec<ToolMetadata>,
    pub metadata: Value,
    pub ephemeral: Value,
}

struct ComInner {
    state: HashMap<String, Value>,
    timeline: Vec<TimelineEntry>,
    sections: SectionRegistry,
    tools: ToolRegistry,
    pending_requests: Vec<ControlRequest>,
    recompile_requested: bool,
    recompile_reasons: Vec<String>,
    section_collisions: Vec<String>,
    system_entries: Vec<String>,
    metadata: Value,
    ephemeral: Value,
}

impl Default for ComInner {
    fn default() -> Self {
        Self {
            state: HashMap::new(),
            timeline: Vec::new(),
            sections: SectionRegistry::new(),
            tools: ToolRegistry::new(),
            pending_requests: Vec::new(),
            recompile_requested: false,
            recompile_reasons: Vec::new(),
            section_collisions: Vec::new(),
            system_entries: Vec::new(),
            metadata: Value::Null,
            ephemeral: Value::Null,
        }
    }
}

/// Per-session mutable engine state (§2, §3, §4.1). Cheaply cloneable —
/// clones share the same underlying state (an `Arc`), matching "one COM per
/// session" (§3 lifecycles).
#[derive(Clone)]
pub struct Com {
    inner: Arc<Mutex<ComInner>>,
    events: broadcast::Sender<ComEvent>,
}

impl Default for Com {
    fn default() -> Self {
        Self::new()
    }
}

impl Com {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(256);
        Self {
            inner: Arc::new(Mutex::new(ComInner::default())),
            events: tx,
        }
    }

    /// Subscribe to COM events (`on("state:changed", ...)` in §4.1).
    pub fn subscribe(&self) -> broadcast::Receiver<ComEvent> {
        self.events.subscribe()
    }

    pub async fn get_state(&self, key: &str) -> Option<Value> {
        self.inner.lock().await.state.get(key).cloned()
    }

    /// Set a keyed value, emitting a `state:changed` event with the new and
    /// previous value.
    pub async fn set_state(&self, key: impl Into<String>, value: Value) {
        let key = key.into();
        let previous = {
            let mut guard = self.inner.lock().await;
            guard.state.insert(key.clone(), value.clone())
        };
        let _ = self.events.send(ComEvent::StateChanged(StateChanged {
            key,
            new: value,
            previous,
        }));
    }

    pub async fn request_recompile(&self, reason: Option<String>) {
        let mut guard = self.inner.lock().await;
        guard.recompile_requested = true;
        if let Some(reason) = reason {
            guard.recompile_reasons.push(reason);
        }
    }

    /// Whether a recompile was requested since the last reset, and the
    /// accumulated reasons.
    pub async fn take_recompile_request(&self) -> (bool, Vec<String>) {
        let mut guard = self.inner.lock().await;
        let requested = guard.recompile_requested;
        let reasons = std::mem::take(&mut guard.recompile_reasons);
        guard.recompile_requested = false;
        (requested, reasons)
    }

    pub async fn request_stop(&self, priority: i64, reason: Option<String>) {
        self.inner
            .lock()
            .await
            .pending_requests
            .push(ControlRequest::stop(priority, reason));
    }

    pub async fn request_continue(&self, priority: i64, reason: Option<String>) {
        self.inner
            .lock()
            .await
            .pending_requests
            .push(ControlRequest::r#continue(priority, reason));
    }

    /// Consume all pending control requests and compute the effective
    /// continuation decision (§4.1, §8 invariant 3: idempotent once the
    /// request set is empty).
    pub async fn resolve_should_continue(&self, current: bool) -> bool {
        let mut guard = self.inner.lock().await;
        let requests = std::mem::take(&mut guard.pending_requests);
        resolve_should_continue(current, &requests)
    }

    pub async fn append_timeline(&self, entry: TimelineEntry) {
        self.inner.lock().await.timeline.push(entry);
    }

    pub async fn timeline(&self) -> Vec<TimelineEntry> {
        self.inner.lock().await.timeline.clone()
    }

    pub async fn timeline_len(&self) -> usize {
        self.inner.lock().await.timeline.len()
    }

    /// Insert/override a section. Returns whether this collided with an
    /// existing id (§4.1 failure semantics: collisions are logged, not
    /// fatal).
    pub async fn upsert_section(&self, section: Section) -> UpsertOutcome {
        let id = section.id.clone();
        let mut guard = self.inner.lock().await;
        let outcome = guard.sections.upsert(section);
        if outcome == UpsertOutcome::Overridden {
            guard.section_collisions.push(id);
        }
        outcome
    }

    pub async fn sections(&self) -> Vec<Section> {
        self.inner.lock().await.sections.iter().cloned().collect()
    }

    pub async fn take_section_collisions(&self) -> Vec<String> {
        std::mem::take(&mut self.inner.lock().await.section_collisions)
    }

    pub async fn clear_sections(&self) {
        self.inner.lock().await.sections.clear();
    }

    /// Reset the tool registry ahead of a fresh compile pass (§4.2: each
    /// pass re-renders the whole tree, so tools must not collide with the
    /// previous pass's registrations).
    pub async fn clear_tools(&self) {
        self.inner.lock().await.tools = ToolRegistry::new();
    }

    pub async fn tools(&self) -> Vec<ToolMetadata> {
        self.inner.lock().await.tools.iter().cloned().collect()
    }

    pub async fn register_tool(&self, tool: ToolMetadata) -> Result<()> {
        self.inner.lock().await.tools.register(tool)
    }

    pub async fn get_tool(&self, name: &str) -> Option<ToolMetadata> {
        self.inner.lock().await.tools.get(name).cloned()
    }

    pub async fn get_tool_by_alias(&self, alias: &str) -> Option<ToolMetadata> {
        self.inner.lock().await.tools.get_by_alias(alias).cloned()
    }

    pub async fn resolve_tool(&self, name_or_alias: &str) -> Option<ToolMetadata> {
        self.inner.lock().await.tools.resolve(name_or_alias).cloned()
    }

    pub async fn set_system_entries(&self, entries: Vec<String>) {
        self.inner.lock().await.system_entries = entries;
    }

    pub async fn set_metadata(&self, metadata: Value) {
        self.inner.lock().await.metadata = metadata;
    }

    pub async fn set_ephemeral(&self, ephemeral: Value) {
        self.inner.lock().await.ephemeral = ephemeral;
    }

    /// Flattened view for the model adapter (§4.1). Tools and sections are
    /// filtered to `audience=model`; `get_tool`/`get_tool_by_alias` remain
    /// the way to reach `audience=user` tools.
    pub async fn to_input(&self) -> ComInput {
        let guard = self.inner.lock().await;
        ComInput {
            timeline: guard.timeline.clone(),
            system_entries: guard.system_entries.clone(),
            sections: guard
                .sections
                .iter()
                .filter(|s| s.audience == Audience::Model)
                .cloned()
                .collect(),
            tools: guard.tools.model_visible().cloned().collect(),
            metadata: guard.metadata.clone(),
            ephemeral: guard.ephemeral.clone(),
        }
    }

    /// Default: `⌈len/4⌉ + 4`. Exposed as a plain function pointer since the
    /// default estimator has no per-COM state.
    pub fn token_estimator(&self) -> fn(&str) -> usize {
        default_token_estimator
    }
}

#[cfg(test)]
#[path = "com.test.rs"]
mod tests;
