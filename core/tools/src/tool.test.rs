use serde_json::json;

use super::*;

#[test]
fn text_output_is_not_an_error() {
    let out = ToolOutput::text("ok");
    assert!(!out.is_error);
    assert_eq!(out.content.len(), 1);
    assert!(matches!(&out.content[0], ContentBlock::Text { text, .. } if text == "ok"));
}

#[test]
fn structured_output_wraps_a_raw_block() {
    let out = ToolOutput::structured(json!({"count": 3}));
    assert!(!out.is_error);
    assert!(matches!(&out.content[0], ContentBlock::Raw { value, .. } if value["count"] == 3));
}

#[test]
fn error_output_is_flagged() {
    let out = ToolOutput::error("bad input");
    assert!(out.is_error);
}

#[test]
fn empty_output_has_no_blocks() {
    let out = ToolOutput::empty();
    assert!(out.content.is_empty());
    assert!(!out.is_error);
}

struct Echo;

#[async_trait::async_trait]
impl ToolHandler for Echo {
    async fn call(&self, input: Value, _ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        Ok(ToolOutput::structured(input))
    }
}

#[tokio::test]
async fn a_handler_can_be_invoked_directly() {
    let ctx = ToolContextBuilder::new("call-1", "session-1").build();
    let out = Echo.call(json!({"x": 1}), &ctx).await.unwrap();
    assert!(matches!(&out.content[0], ContentBlock::Raw { value, .. } if value["x"] == 1));
}
