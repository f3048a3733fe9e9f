//! `MCP` execution-kind routing (§4.4 "Routing").
//!
//! Delegates the call to a connected MCP server by tool name. Unlike
//! `CLIENT`, MCP calls are always request/response — there is no
//! fire-and-forget mode in the MCP tool-call protocol.

use async_trait::async_trait;
use serde_json::Value;

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::tool::ToolOutput;

#[async_trait]
pub trait McpBridge: Send + Sync {
    async fn call(&self, tool_name: &str, input: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError>;
}

#[cfg(test)]
#[path = "mcp_bridge.test.rs"]
mod tests;
