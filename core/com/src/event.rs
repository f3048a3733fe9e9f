//! COM-internal events (distinct from the engine's `LifecycleEvent` stream).

use serde_json::Value;

/// Emitted on `set_state` (§4.1).
#[derive(Debug, Clone)]
pub struct StateChanged {
    pub key: String,
    pub new: Value,
    pub previous: Option<Value>,
}

#[derive(Debug, Clone)]
pub enum ComEvent {
    StateChanged(StateChanged),
}
