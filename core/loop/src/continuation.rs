//! Continuation Policy (§4.7): components register `useContinuation`
//! callbacks, called in registration order against the tick result. Each
//! may continue, stop, or defer; a returned decision overrides the
//! running value, deferring preserves it. Final resolution always goes
//! through [`agentick_com::Com::resolve_should_continue`] (§4.6 step 9).

use std::sync::Arc;

use agentick_com::Com;
use agentick_com::TickState;

/// What a registered continuation callback decided for this tick, mirroring
/// §4.7's return shapes (`true`/`false`/`undefined`/`{continue,reason}`/
/// `{stop,reason}`; the two reasoned forms and the `result.stop`/`.continue`
/// call forms collapse onto the same two variants here).
#[derive(Debug, Clone)]
pub enum ContinuationOutcome {
    Continue(Option<String>),
    Stop(Option<String>),
    /// `undefined` — preserve whatever the chain has decided so far.
    Defer,
}

/// A registered `useContinuation` callback.
pub type ContinuationCallback = Arc<dyn Fn(&TickState) -> ContinuationOutcome + Send + Sync>;

/// Fold every callback's decision into `seed` in registration order so
/// later callbacks observe earlier ones, routing non-`Defer` decisions
/// through `com.request_continue`/`request_stop` as they occur, then
/// resolve the folded value through `com.resolve_should_continue` — the
/// only aggregation point COM exposes, so anything a component requested
/// directly during rendering this tick is folded in too.
pub async fn apply_continuation_policy(
    callbacks: &[ContinuationCallback],
    tick: &TickState,
    com: &Com,
    seed: bool,
) -> bool {
    let mut current = seed;
    for callback in callbacks {
        match callback(tick) {
            ContinuationOutcome::Continue(reason) => {
                com.request_continue(0, reason).await;
                current = true;
            }
            ContinuationOutcome::Stop(reason) => {
                com.request_stop(0, reason).await;
                current = false;
            }
            ContinuationOutcome::Defer => {}
        }
    }
    com.resolve_should_continue(current).await
}

#[cfg(test)]
#[path = "continuation.test.rs"]
mod tests;
