use std::sync::Arc;

use agentick_accumulator::ContentBlock;
use serde_json::json;

use super::*;

struct Tagging(&'static str);

#[async_trait::async_trait]
impl Middleware for Tagging {
    async fn before(&self, _tool_name: &str, input: Value, _ctx: &ToolContext) -> MiddlewareDecision {
        let mut input = input;
        input[self.0] = json!(true);
        MiddlewareDecision::Proceed(input)
    }

    async fn after(&self, _tool_name: &str, output: ToolOutput, _ctx: &ToolContext) -> ToolOutput {
        let mut output = output;
        output.content.push(crate::tool::text_block(self.0.to_string()));
        output
    }
}

struct Blocking;

#[async_trait::async_trait]
impl Middleware for Blocking {
    async fn before(&self, _tool_name: &str, _input: Value, _ctx: &ToolContext) -> MiddlewareDecision {
        MiddlewareDecision::Reject("blocked".to_string())
    }
}

fn ctx() -> ToolContext {
    ToolContext::builder("call-1", "session-1").build()
}

#[tokio::test]
async fn before_runs_outermost_first_and_threads_input() {
    let chain: Vec<Arc<dyn Middleware>> = vec![Arc::new(Tagging("a")), Arc::new(Tagging("b"))];
    let decision = run_before(&chain, "t", json!({}), &ctx()).await;
    match decision {
        MiddlewareDecision::Proceed(v) => {
            assert_eq!(v["a"], json!(true));
            assert_eq!(v["b"], json!(true));
        }
        MiddlewareDecision::Reject(_) => panic!("expected proceed"),
    }
}

#[tokio::test]
async fn a_rejection_short_circuits_the_chain() {
    let chain: Vec<Arc<dyn Middleware>> = vec![Arc::new(Tagging("a")), Arc::new(Blocking), Arc::new(Tagging("c"))];
    let decision = run_before(&chain, "t", json!({}), &ctx()).await;
    assert!(matches!(decision, MiddlewareDecision::Reject(reason) if reason == "blocked"));
}

#[tokio::test]
async fn after_runs_innermost_first() {
    let chain: Vec<Arc<dyn Middleware>> = vec![Arc::new(Tagging("a")), Arc::new(Tagging("b"))];
    let out = run_after(&chain, "t", ToolOutput::empty(), &ctx()).await;
    let texts: Vec<String> = out
        .content
        .iter()
        .map(|b| match b {
            ContentBlock::Text { text, .. } => text.clone(),
            _ => panic!("expected text block"),
        })
        .collect();
    assert_eq!(texts, vec!["b".to_string(), "a".to_string()]);
}
