use std::sync::Arc;

use agentick_accumulator::CompletedToolCall;
use agentick_accumulator::ContentBlock;
use agentick_com::ConfirmationPolicy;
use agentick_com::ExecutionKind;
use agentick_com::TimelineEntry;
use agentick_com::ToolMetadata;
use agentick_com::ToolResultErrorKind;
use serde_json::json;

use super::*;
use crate::confirmation::ConfirmationBridge;
use crate::confirmation::ConfirmationDecision;
use crate::confirmation::ToolEventSink;
use crate::middleware::Middleware;
use crate::middleware::MiddlewareDecision;

struct Echo;

#[async_trait::async_trait]
impl ToolHandler for Echo {
    async fn call(&self, input: Value, _ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        Ok(ToolOutput::structured(input))
    }
}

struct AlwaysFails;

#[async_trait::async_trait]
impl ToolHandler for AlwaysFails {
    async fn call(&self, _input: Value, _ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        crate::error::tool_error::NetworkErrorSnafu { message: "connection reset" }.fail()
    }
}

fn call(id: &str, name: &str, input: Value) -> CompletedToolCall {
    CompletedToolCall {
        id: id.to_string(),
        name: name.to_string(),
        input,
    }
}

fn text(entry: &TimelineEntry) -> String {
    match entry {
        TimelineEntry::ToolResult { content, .. } => content
            .iter()
            .map(|b| match b {
                ContentBlock::Text { text, .. } => text.clone(),
                ContentBlock::Raw { value, .. } => value.to_string(),
                _ => String::new(),
            })
            .collect(),
        _ => panic!("expected a ToolResult entry"),
    }
}

#[tokio::test]
async fn an_unresolvable_tool_name_maps_to_tool_not_found() {
    let com = Com::new();
    let executor = ToolExecutor::builder(com, "session-1").build();

    let results = executor.execute_tool_calls(vec![call("c1", "ghost", json!({}))]).await;
    assert_eq!(results.len(), 1);
    match &results[0] {
        TimelineEntry::ToolResult { success, error_kind, .. } => {
            assert!(!success);
            assert_eq!(*error_kind, Some(ToolResultErrorKind::ToolNotFound));
        }
        _ => panic!("expected ToolResult"),
    }
}

#[tokio::test]
async fn invalid_input_is_rejected_before_the_handler_runs() {
    let com = Com::new();
    let mut tool = ToolMetadata::new("echo", ExecutionKind::Server);
    tool.parameters = json!({
        "type": "object",
        "properties": {"text": {"type": "string"}},
        "required": ["text"],
    });
    com.register_tool(tool).await.unwrap();

    let executor = ToolExecutor::builder(com, "session-1").with_handler("echo", Arc::new(Echo)).build();

    let results = executor.execute_tool_calls(vec![call("c1", "echo", json!({}))]).await;
    match &results[0] {
        TimelineEntry::ToolResult { success, error_kind, .. } => {
            assert!(!success);
            assert_eq!(*error_kind, Some(ToolResultErrorKind::ValidationError));
        }
        _ => panic!("expected ToolResult"),
    }
}

#[tokio::test]
async fn a_server_tool_executes_and_returns_its_output() {
    let com = Com::new();
    com.register_tool(ToolMetadata::new("echo", ExecutionKind::Server)).await.unwrap();

    let executor = ToolExecutor::builder(com, "session-1").with_handler("echo", Arc::new(Echo)).build();

    let results = executor.execute_tool_calls(vec![call("c1", "echo", json!({"x": 1}))]).await;
    match &results[0] {
        TimelineEntry::ToolResult { success, tool_use_id, .. } => {
            assert!(success);
            assert_eq!(tool_use_id, "c1");
        }
        _ => panic!("expected ToolResult"),
    }
}

#[tokio::test]
async fn a_tool_alias_resolves_to_the_registered_name() {
    let com = Com::new();
    let mut tool = ToolMetadata::new("echo", ExecutionKind::Server);
    tool.aliases = vec!["echo_alias".to_string()];
    com.register_tool(tool).await.unwrap();

    let executor = ToolExecutor::builder(com, "session-1").with_handler("echo", Arc::new(Echo)).build();

    let results = executor.execute_tool_calls(vec![call("c1", "echo_alias", json!({}))]).await;
    match &results[0] {
        TimelineEntry::ToolResult { success, .. } => assert!(success),
        _ => panic!("expected ToolResult"),
    }
}

#[tokio::test]
async fn a_failing_handler_is_mapped_to_its_result_kind() {
    let com = Com::new();
    com.register_tool(ToolMetadata::new("flaky", ExecutionKind::Server)).await.unwrap();

    let executor = ToolExecutor::builder(com, "session-1").with_handler("flaky", Arc::new(AlwaysFails)).build();

    let results = executor.execute_tool_calls(vec![call("c1", "flaky", json!({}))]).await;
    match &results[0] {
        TimelineEntry::ToolResult { success, error_kind, .. } => {
            assert!(!success);
            assert_eq!(*error_kind, Some(ToolResultErrorKind::NetworkError));
        }
        _ => panic!("expected ToolResult"),
    }
}

#[tokio::test]
async fn a_confirmation_policy_of_never_skips_confirmation_entirely() {
    let com = Com::new();
    let mut tool = ToolMetadata::new("echo", ExecutionKind::Server);
    tool.confirmation = ConfirmationPolicy::Never;
    com.register_tool(tool).await.unwrap();

    struct PanicsIfAsked;
    #[async_trait::async_trait]
    impl ConfirmationBridge for PanicsIfAsked {
        async fn request_confirmation(&self, _tool_name: &str, _input: &Value, _ctx: &ToolContext) -> ConfirmationDecision {
            panic!("should not be asked");
        }
    }

    let executor = ToolExecutor::builder(com, "session-1")
        .with_handler("echo", Arc::new(Echo))
        .with_confirmation_bridge(Arc::new(PanicsIfAsked))
        .build();

    let results = executor.execute_tool_calls(vec![call("c1", "echo", json!({}))]).await;
    match &results[0] {
        TimelineEntry::ToolResult { success, .. } => assert!(success),
        _ => panic!("expected ToolResult"),
    }
}

#[tokio::test]
async fn a_pending_confirmation_notifies_the_event_sink_before_waiting_on_the_bridge() {
    let com = Com::new();
    let mut tool = ToolMetadata::new("echo", ExecutionKind::Server);
    tool.confirmation = ConfirmationPolicy::Always;
    com.register_tool(tool).await.unwrap();

    struct RecordingSink {
        calls: std::sync::Mutex<Vec<String>>,
    }
    #[async_trait::async_trait]
    impl ToolEventSink for RecordingSink {
        async fn confirmation_required(&self, tool_call_id: &str, tool_name: &str, _input: &Value, reason: Option<&str>) {
            assert!(reason.is_none());
            self.calls.lock().unwrap().push(format!("{tool_call_id}:{tool_name}"));
        }
    }
    let sink = Arc::new(RecordingSink { calls: std::sync::Mutex::new(Vec::new()) });

    let executor = ToolExecutor::builder(com, "session-1")
        .with_handler("echo", Arc::new(Echo))
        .with_event_sink(sink.clone())
        .build();

    let results = executor.execute_tool_calls(vec![call("c1", "echo", json!({}))]).await;
    match &results[0] {
        TimelineEntry::ToolResult { success, .. } => assert!(success),
        _ => panic!("expected ToolResult"),
    }
    assert_eq!(*sink.calls.lock().unwrap(), vec!["c1:echo".to_string()]);
}

#[tokio::test]
async fn a_denied_confirmation_prevents_the_handler_from_running() {
    let com = Com::new();
    let mut tool = ToolMetadata::new("echo", ExecutionKind::Server);
    tool.confirmation = ConfirmationPolicy::Always;
    com.register_tool(tool).await.unwrap();

    struct AlwaysDenies;
    #[async_trait::async_trait]
    impl ConfirmationBridge for AlwaysDenies {
        async fn request_confirmation(&self, _tool_name: &str, _input: &Value, _ctx: &ToolContext) -> ConfirmationDecision {
            ConfirmationDecision::Denied
        }
    }

    let executor = ToolExecutor::builder(com, "session-1")
        .with_handler("echo", Arc::new(Echo))
        .with_confirmation_bridge(Arc::new(AlwaysDenies))
        .build();

    let results = executor.execute_tool_calls(vec![call("c1", "echo", json!({}))]).await;
    match &results[0] {
        TimelineEntry::ToolResult { success, error_kind, .. } => {
            assert!(!success);
            assert_eq!(*error_kind, Some(ToolResultErrorKind::UserDenied));
        }
        _ => panic!("expected ToolResult"),
    }
}

#[tokio::test(start_paused = true)]
async fn an_unanswered_confirmation_is_distinct_from_an_explicit_denial() {
    let com = Com::new();
    let mut tool = ToolMetadata::new("echo", ExecutionKind::Server);
    tool.confirmation = ConfirmationPolicy::Always;
    tool.timeout = std::time::Duration::from_millis(20);
    com.register_tool(tool).await.unwrap();

    struct NeverResponds;
    #[async_trait::async_trait]
    impl ConfirmationBridge for NeverResponds {
        async fn request_confirmation(&self, _tool_name: &str, _input: &Value, _ctx: &ToolContext) -> ConfirmationDecision {
            std::future::pending::<()>().await;
            unreachable!()
        }
    }

    let executor = ToolExecutor::builder(com, "session-1")
        .with_handler("echo", Arc::new(Echo))
        .with_confirmation_bridge(Arc::new(NeverResponds))
        .build();

    let results = executor.execute_tool_calls(vec![call("c1", "echo", json!({}))]).await;
    match &results[0] {
        TimelineEntry::ToolResult { success, error_kind, .. } => {
            assert!(!success);
            assert_eq!(*error_kind, Some(ToolResultErrorKind::ConfirmationTimeout));
        }
        _ => panic!("expected ToolResult"),
    }
}

#[tokio::test]
async fn a_client_tool_with_fire_and_forget_returns_the_default_result_immediately() {
    let com = Com::new();
    let mut tool = ToolMetadata::new("notify", ExecutionKind::Client);
    tool.default_result = Some(json!({"queued": true}));
    tool.requires_response = false;
    com.register_tool(tool).await.unwrap();

    struct SlowClient;
    #[async_trait::async_trait]
    impl crate::client_bridge::ClientBridge for SlowClient {
        async fn deliver(&self, _tool_name: &str, input: Value, _ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
            Ok(ToolOutput::structured(input))
        }
    }

    let executor = ToolExecutor::builder(com, "session-1").with_client_bridge(Arc::new(SlowClient)).build();

    let results = executor.execute_tool_calls(vec![call("c1", "notify", json!({"x": 1}))]).await;
    assert!(text(&results[0]).contains("queued"));
}

#[tokio::test]
async fn a_client_tool_that_requires_a_response_returns_the_bridges_output() {
    let com = Com::new();
    let tool = ToolMetadata::new("ask", ExecutionKind::Client);
    com.register_tool(tool).await.unwrap();

    struct EchoClient;
    #[async_trait::async_trait]
    impl crate::client_bridge::ClientBridge for EchoClient {
        async fn deliver(&self, _tool_name: &str, input: Value, _ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
            Ok(ToolOutput::structured(input))
        }
    }

    let executor = ToolExecutor::builder(com, "session-1").with_client_bridge(Arc::new(EchoClient)).build();

    let results = executor.execute_tool_calls(vec![call("c1", "ask", json!({"x": 1}))]).await;
    assert!(text(&results[0]).contains('1'));
}

#[tokio::test(start_paused = true)]
async fn a_hung_client_tool_times_out() {
    let com = Com::new();
    let mut tool = ToolMetadata::new("ask", ExecutionKind::Client);
    tool.timeout = std::time::Duration::from_millis(20);
    com.register_tool(tool).await.unwrap();

    struct HangingClient;
    #[async_trait::async_trait]
    impl crate::client_bridge::ClientBridge for HangingClient {
        async fn deliver(&self, _tool_name: &str, _input: Value, _ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
            std::future::pending::<()>().await;
            unreachable!()
        }
    }

    let executor = ToolExecutor::builder(com, "session-1").with_client_bridge(Arc::new(HangingClient)).build();

    let results = executor.execute_tool_calls(vec![call("c1", "ask", json!({}))]).await;
    match &results[0] {
        TimelineEntry::ToolResult { success, error_kind, .. } => {
            assert!(!success);
            assert_eq!(*error_kind, Some(ToolResultErrorKind::TimeoutError));
        }
        _ => panic!("expected ToolResult"),
    }
}

#[tokio::test]
async fn an_mcp_tool_routes_through_the_mcp_bridge() {
    let com = Com::new();
    com.register_tool(ToolMetadata::new("remote_fetch", ExecutionKind::Mcp)).await.unwrap();

    struct StubServer;
    #[async_trait::async_trait]
    impl crate::mcp_bridge::McpBridge for StubServer {
        async fn call(&self, _tool_name: &str, _input: Value, _ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
            Ok(ToolOutput::text("remote result"))
        }
    }

    let executor = ToolExecutor::builder(com, "session-1").with_mcp_bridge(Arc::new(StubServer)).build();

    let results = executor.execute_tool_calls(vec![call("c1", "remote_fetch", json!({}))]).await;
    assert_eq!(text(&results[0]), "remote result");
}

#[tokio::test]
async fn a_provider_tool_short_circuits_to_an_empty_success() {
    let com = Com::new();
    com.register_tool(ToolMetadata::new("web_search", ExecutionKind::Provider)).await.unwrap();

    let executor = ToolExecutor::builder(com, "session-1").build();

    let results = executor.execute_tool_calls(vec![call("c1", "web_search", json!({}))]).await;
    match &results[0] {
        TimelineEntry::ToolResult { success, content, .. } => {
            assert!(success);
            assert!(content.is_empty());
        }
        _ => panic!("expected ToolResult"),
    }
}

struct Tagging;

#[async_trait::async_trait]
impl Middleware for Tagging {
    async fn before(&self, _tool_name: &str, input: Value, _ctx: &ToolContext) -> MiddlewareDecision {
        let mut input = input;
        input["tagged"] = json!(true);
        MiddlewareDecision::Proceed(input)
    }
}

#[tokio::test]
async fn middleware_before_rewrites_the_input_the_handler_sees() {
    let com = Com::new();
    com.register_tool(ToolMetadata::new("echo", ExecutionKind::Server)).await.unwrap();

    let executor = ToolExecutor::builder(com, "session-1")
        .with_handler("echo", Arc::new(Echo))
        .with_middleware(Arc::new(Tagging))
        .build();

    let results = executor.execute_tool_calls(vec![call("c1", "echo", json!({}))]).await;
    assert!(text(&results[0]).contains("tagged"));
}

struct Blocking;

#[async_trait::async_trait]
impl Middleware for Blocking {
    async fn before(&self, _tool_name: &str, _input: Value, _ctx: &ToolContext) -> MiddlewareDecision {
        MiddlewareDecision::Reject("not allowed".to_string())
    }
}

#[tokio::test]
async fn a_middleware_rejection_prevents_the_handler_from_running() {
    let com = Com::new();
    com.register_tool(ToolMetadata::new("echo", ExecutionKind::Server)).await.unwrap();

    let executor = ToolExecutor::builder(com, "session-1")
        .with_handler("echo", Arc::new(Echo))
        .with_middleware(Arc::new(Blocking))
        .build();

    let results = executor.execute_tool_calls(vec![call("c1", "echo", json!({}))]).await;
    match &results[0] {
        TimelineEntry::ToolResult { success, error_kind, .. } => {
            assert!(!success);
            assert_eq!(*error_kind, Some(ToolResultErrorKind::ApplicationError));
        }
        _ => panic!("expected ToolResult"),
    }
}

#[tokio::test]
async fn calls_sharing_a_concurrency_group_run_in_submission_order() {
    let com = Com::new();
    let mut tool = ToolMetadata::new("append", ExecutionKind::Server);
    tool.concurrency_group = Some("shared".to_string());
    com.register_tool(tool).await.unwrap();

    struct RecordOrder(Arc<tokio::sync::Mutex<Vec<String>>>);
    #[async_trait::async_trait]
    impl ToolHandler for RecordOrder {
        async fn call(&self, input: Value, _ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
            self.0.lock().await.push(input["tag"].as_str().unwrap().to_string());
            Ok(ToolOutput::empty())
        }
    }

    let order = Arc::new(tokio::sync::Mutex::new(Vec::new()));
    let executor = ToolExecutor::builder(com, "session-1")
        .with_handler("append", Arc::new(RecordOrder(order.clone())))
        .build();

    let calls = vec![
        call("c1", "append", json!({"tag": "first"})),
        call("c2", "append", json!({"tag": "second"})),
    ];
    let results = executor.execute_tool_calls(calls).await;
    assert_eq!(results.len(), 2);
    assert_eq!(*order.lock().await, vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn every_tool_error_variant_maps_to_a_result_kind() {
    assert_eq!(
        result_kind_for(&crate::error::tool_error::NotFoundSnafu { name: "x" }.build()),
        ToolResultErrorKind::ToolNotFound
    );
    assert_eq!(
        result_kind_for(&crate::error::tool_error::InvalidInputSnafu { message: "x" }.build()),
        ToolResultErrorKind::ValidationError
    );
    assert_eq!(
        result_kind_for(&crate::error::tool_error::TimeoutSnafu { timeout_secs: 5u64 }.build()),
        ToolResultErrorKind::TimeoutError
    );
    assert_eq!(
        result_kind_for(&crate::error::tool_error::CancelledSnafu {}.build()),
        ToolResultErrorKind::AbortError
    );
    assert_eq!(
        result_kind_for(&crate::error::tool_error::NetworkErrorSnafu { message: "x" }.build()),
        ToolResultErrorKind::NetworkError
    );
    assert_eq!(
        result_kind_for(&crate::error::tool_error::RateLimitedSnafu { message: "x" }.build()),
        ToolResultErrorKind::RateLimitError
    );
    assert_eq!(
        result_kind_for(&crate::error::tool_error::AuthErrorSnafu { message: "x" }.build()),
        ToolResultErrorKind::AuthError
    );
    assert_eq!(
        result_kind_for(&crate::error::tool_error::MiddlewareRejectedSnafu { reason: "x" }.build()),
        ToolResultErrorKind::ApplicationError
    );
    assert_eq!(
        result_kind_for(&crate::error::tool_error::InternalSnafu { message: "x" }.build()),
        ToolResultErrorKind::UnknownError
    );
}

