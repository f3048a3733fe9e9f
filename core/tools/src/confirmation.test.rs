use serde_json::json;
use tokio::time::Duration;

use super::*;

struct NeverResponds;

#[async_trait::async_trait]
impl ConfirmationBridge for NeverResponds {
    async fn request_confirmation(&self, _tool_name: &str, _input: &Value, _ctx: &ToolContext) -> ConfirmationDecision {
        std::future::pending::<()>().await;
        unreachable!()
    }
}

struct AlwaysDenies;

#[async_trait::async_trait]
impl ConfirmationBridge for AlwaysDenies {
    async fn request_confirmation(&self, _tool_name: &str, _input: &Value, _ctx: &ToolContext) -> ConfirmationDecision {
        ConfirmationDecision::Denied
    }
}

fn ctx() -> ToolContext {
    ToolContext::builder("call-1", "session-1").build()
}

#[tokio::test]
async fn auto_approve_always_approves() {
    let outcome = confirm_with_timeout(&AutoApprove, "shell", &json!({}), &ctx(), Duration::from_secs(1)).await;
    assert_eq!(outcome, ConfirmationOutcome::Approved);
}

#[tokio::test]
async fn explicit_denial_is_denied() {
    let outcome = confirm_with_timeout(&AlwaysDenies, "shell", &json!({}), &ctx(), Duration::from_secs(1)).await;
    assert_eq!(outcome, ConfirmationOutcome::Denied);
}

#[tokio::test(start_paused = true)]
async fn an_unanswered_confirmation_times_out_distinctly_from_denial() {
    let outcome = confirm_with_timeout(&NeverResponds, "shell", &json!({}), &ctx(), Duration::from_millis(50)).await;
    assert_eq!(outcome, ConfirmationOutcome::TimedOut);
}
