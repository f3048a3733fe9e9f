//! Confirmation bridge (§4.4 "Confirmation").
//!
//! `ToolMetadata::confirmation` decides *whether* a call needs sign-off;
//! this module is *how* that sign-off is obtained from whatever surface the
//! host wires up (a CLI prompt, a UI dialog, auto-approve for tests). A
//! missing response within `ToolMetadata::timeout` (default
//! [`agentick_com::DEFAULT_CONFIRMATION_TIMEOUT`]) never executes the tool
//! either, but is distinguished from an explicit denial so the model sees
//! `ConfirmationTimeout` rather than `UserDenied` on the result.

use async_trait::async_trait;
use serde_json::Value;
use tokio::time::Duration;

use crate::context::ToolContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationDecision {
    Approved,
    Denied,
}

/// Outcome of [`confirm_with_timeout`], distinguishing an explicit denial
/// from the bridge simply never answering in time (§4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationOutcome {
    Approved,
    Denied,
    TimedOut,
}

#[async_trait]
pub trait ConfirmationBridge: Send + Sync {
    async fn request_confirmation(
        &self,
        tool_name: &str,
        input: &Value,
        ctx: &ToolContext,
    ) -> ConfirmationDecision;
}

/// Waits on the bridge up to `timeout`; elapses to `TimedOut` rather than
/// silently folding into `Denied` (§4.4: unanswered confirmations never
/// execute the tool, but the caller can tell the two apart).
pub async fn confirm_with_timeout(
    bridge: &dyn ConfirmationBridge,
    tool_name: &str,
    input: &Value,
    ctx: &ToolContext,
    timeout: Duration,
) -> ConfirmationOutcome {
    match tokio::time::timeout(timeout, bridge.request_confirmation(tool_name, input, ctx)).await {
        Ok(ConfirmationDecision::Approved) => ConfirmationOutcome::Approved,
        Ok(ConfirmationDecision::Denied) => ConfirmationOutcome::Denied,
        Err(_) => ConfirmationOutcome::TimedOut,
    }
}

/// Notified when a call suspends awaiting confirmation (§4.4 step 3), before
/// the executor starts waiting on the [`ConfirmationBridge`]. Distinct from
/// the bridge itself: the bridge decides approve/deny, this only announces
/// that a call is now suspended.
#[async_trait]
pub trait ToolEventSink: Send + Sync {
    async fn confirmation_required(&self, tool_call_id: &str, tool_name: &str, input: &Value, reason: Option<&str>);
}

/// Always approves. Useful for tests and non-interactive hosts that trust
/// their own `ConfirmationPolicy` gating.
pub struct AutoApprove;

#[async_trait]
impl ConfirmationBridge for AutoApprove {
    async fn request_confirmation(&self, _tool_name: &str, _input: &Value, _ctx: &ToolContext) -> ConfirmationDecision {
        ConfirmationDecision::Approved
    }
}

#[cfg(test)]
#[path = "confirmation.test.rs"]
mod tests;
