//! Execution outcome (§4.6 step 10, §3 "Execution"): what the engine
//! returns once it stops ticking, independent of why.

use agentick_com::TimelineEntry;

/// Why the engine stopped ticking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The continuation policy (§4.7) resolved to `false`.
    ContinuationPolicy,
    /// `max_ticks` was reached with the policy still saying continue.
    MaxTicksReached,
    /// The session was aborted mid-execution (§5 cancellation).
    Aborted,
}

/// Returned once the engine stops ticking (§4.6 step 10's `execution_end`).
#[derive(Debug, Clone)]
pub struct ExecutionOutcome {
    /// Number of ticks actually run, including a tick cut short by abort.
    pub ticks_completed: u64,
    pub aborted: bool,
    pub stop_reason: StopReason,
    /// Every timeline entry appended since the execution started
    /// (`execution_end`'s "new timeline entries", §4.6 step 10).
    pub new_timeline_entries: Vec<TimelineEntry>,
}

#[cfg(test)]
#[path = "result.test.rs"]
mod tests;
