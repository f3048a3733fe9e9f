use agentick_accumulator::ContentBlock;
use serde_json::json;

use super::*;

struct StubServer;

#[async_trait::async_trait]
impl McpBridge for StubServer {
    async fn call(&self, tool_name: &str, _input: Value, _ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        if tool_name == "unknown_tool" {
            return crate::error::tool_error::NotFoundSnafu { name: tool_name }.fail();
        }
        Ok(ToolOutput::text("mcp result"))
    }
}

#[tokio::test]
async fn a_successful_call_returns_output() {
    let ctx = ToolContext::builder("call-1", "session-1").build();
    let out = StubServer.call("fetch", json!({}), &ctx).await.unwrap();
    assert!(matches!(&out.content[0], ContentBlock::Text { text, .. } if text == "mcp result"));
}

#[tokio::test]
async fn an_unresolvable_remote_tool_surfaces_not_found() {
    let ctx = ToolContext::builder("call-1", "session-1").build();
    let err = StubServer.call("unknown_tool", json!({}), &ctx).await.unwrap_err();
    assert!(matches!(err, ToolError::NotFound { .. }));
}
