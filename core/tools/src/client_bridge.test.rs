use agentick_accumulator::ContentBlock;
use serde_json::json;

use super::*;

struct Echo;

#[async_trait::async_trait]
impl ClientBridge for Echo {
    async fn deliver(&self, _tool_name: &str, input: Value, _ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        Ok(ToolOutput::structured(input))
    }
}

fn ctx() -> ToolContext {
    ToolContext::builder("call-1", "session-1").build()
}

#[tokio::test]
async fn requires_response_returns_the_bridge_result() {
    let out = dispatch(&Echo, "ui_prompt", json!({"x": 1}), &ctx(), ClientResponse::RequiresResponse, None)
        .await
        .unwrap();
    assert!(matches!(&out.content[0], ContentBlock::Raw { value, .. } if value["x"] == 1));
}

#[tokio::test]
async fn fire_and_forget_returns_the_default_result_not_the_bridge_result() {
    let default = json!({"ok": true});
    let out = dispatch(&Echo, "notify", json!({"x": 1}), &ctx(), ClientResponse::FireAndForget, Some(&default))
        .await
        .unwrap();
    assert!(matches!(&out.content[0], ContentBlock::Raw { value, .. } if value["ok"] == true));
}

#[tokio::test]
async fn fire_and_forget_without_a_default_result_is_empty() {
    let out = dispatch(&Echo, "notify", json!({"x": 1}), &ctx(), ClientResponse::FireAndForget, None)
        .await
        .unwrap();
    assert!(out.content.is_empty());
}
