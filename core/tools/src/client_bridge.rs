//! `CLIENT` execution-kind routing (§4.4 "Routing").
//!
//! `CLIENT` tools don't run in-process; the call is handed to the host
//! surface (editor extension, TUI, remote client) and the executor either
//! waits for a result (`RequiresResponse`) or returns `default_result`
//! immediately (`FireAndForget`).

use async_trait::async_trait;
use serde_json::Value;

use agentick_com::ClientResponse;

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::tool::ToolOutput;

#[async_trait]
pub trait ClientBridge: Send + Sync {
    /// Deliver a call to the client surface. For `FireAndForget` tools the
    /// executor does not await this future's result before moving on — see
    /// `ClientBridge::dispatch` below for the wrapping logic.
    async fn deliver(&self, tool_name: &str, input: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError>;
}

/// Dispatches per the tool's [`ClientResponse`] mode, falling back to
/// `default_result` for fire-and-forget calls.
pub async fn dispatch(
    bridge: &dyn ClientBridge,
    tool_name: &str,
    input: Value,
    ctx: &ToolContext,
    mode: ClientResponse,
    default_result: Option<&Value>,
) -> Result<ToolOutput, ToolError> {
    match mode {
        ClientResponse::RequiresResponse => bridge.deliver(tool_name, input, ctx).await,
        ClientResponse::FireAndForget => {
            let _ = bridge.deliver(tool_name, input, ctx).await;
            Ok(default_result
                .cloned()
                .map(ToolOutput::structured)
                .unwrap_or_else(ToolOutput::empty))
        }
    }
}

#[cfg(test)]
#[path = "client_bridge.test.rs"]
mod tests;
