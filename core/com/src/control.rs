//! Control-flow requests and continuation resolution (§3 COM invariants,
//! §4.1 `resolve_shouldContinue`, §8 invariant 3).

/// A stop or continue request contributed during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Stop,
    Continue,
}

#[derive(Debug, Clone)]
pub struct ControlRequest {
    pub kind: ControlKind,
    pub priority: i64,
    pub reason: Option<String>,
}

impl ControlRequest {
    pub fn stop(priority: i64, reason: Option<String>) -> Self {
        Self {
            kind: ControlKind::Stop,
            priority,
            reason,
        }
    }

    pub fn r#continue(priority: i64, reason: Option<String>) -> Self {
        Self {
            kind: ControlKind::Continue,
            priority,
            reason,
        }
    }
}

/// Fold all requests made during a tick into an effective continue/stop
/// decision (§4.1):
///
/// - requests are grouped by priority, highest first;
/// - within the highest-priority tier: any `Stop` wins (stop-beats-continue
///   at equal priority); else any `Continue` flips a `false` seed to `true`;
///   otherwise the seed is preserved.
pub fn resolve_should_continue(seed: bool, requests: &[ControlRequest]) -> bool {
    let Some(max_priority) = requests.iter().map(|r| r.priority).max() else {
        return seed;
    };
    let top_tier: Vec<&ControlRequest> = requests
        .iter()
        .filter(|r| r.priority == max_priority)
        .collect();

    if top_tier.iter().any(|r| r.kind == ControlKind::Stop) {
        return false;
    }
    if !seed && top_tier.iter().any(|r| r.kind == ControlKind::Continue) {
        return true;
    }
    seed
}

#[cfg(test)]
#[path = "control.test.rs"]
mod tests;
