//! The tool executor (§4.4): resolution, validation, confirmation, routing,
//! middleware, and non-fatal error mapping for a batch of completed tool
//! calls from one model turn.
//!
//! Per §5's single-logical-thread scheduling model, a batch's calls run
//! concurrently via [`futures::future::join_all`] rather than
//! `tokio::spawn` — there is no parallelism to gain from a second OS
//! thread, only cooperative interleaving of I/O-bound work. Calls sharing a
//! `concurrency_group` run sequentially relative to each other, in the
//! order they appear in the batch.

use std::collections::HashMap;
use std::sync::Arc;

use agentick_accumulator::CompletedToolCall;
use agentick_com::ClientResponse;
use agentick_com::Com;
use agentick_com::ExecutionKind;
use agentick_com::TimelineEntry;
use agentick_com::ToolMetadata;
use agentick_com::ToolResultErrorKind;
use futures::future::join_all;
use jsonschema::JSONSchema;
use serde_json::Value;
use tracing::debug;

use crate::client_bridge::ClientBridge;
use crate::confirmation::ConfirmationBridge;
use crate::confirmation::ConfirmationOutcome;
use crate::confirmation::ToolEventSink;
use crate::confirmation::confirm_with_timeout;
use crate::context::ToolContext;
use crate::error::ToolError;
use crate::mcp_bridge::McpBridge;
use crate::middleware::Middleware;
use crate::middleware::MiddlewareDecision;
use crate::middleware::run_after;
use crate::middleware::run_before;
use crate::tool::ToolHandler;
use crate::tool::ToolOutput;
use crate::tool::text_block;

/// Builder-assembled dispatcher for one session's tool calls.
pub struct ToolExecutor {
    com: Com,
    session_id: String,
    cwd: std::path::PathBuf,
    handlers: HashMap<String, Arc<dyn ToolHandler>>,
    client_bridge: Option<Arc<dyn ClientBridge>>,
    mcp_bridge: Option<Arc<dyn McpBridge>>,
    confirmation_bridge: Arc<dyn ConfirmationBridge>,
    event_sink: Option<Arc<dyn ToolEventSink>>,
    middleware: Vec<Arc<dyn Middleware>>,
}

pub struct ToolExecutorBuilder {
    com: Com,
    session_id: String,
    cwd: std::path::PathBuf,
    handlers: HashMap<String, Arc<dyn ToolHandler>>,
    client_bridge: Option<Arc<dyn ClientBridge>>,
    mcp_bridge: Option<Arc<dyn McpBridge>>,
    confirmation_bridge: Arc<dyn ConfirmationBridge>,
    event_sink: Option<Arc<dyn ToolEventSink>>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl ToolExecutorBuilder {
    pub fn new(com: Com, session_id: impl Into<String>) -> Self {
        Self {
            com,
            session_id: session_id.into(),
            cwd: std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("/")),
            handlers: HashMap::new(),
            client_bridge: None,
            mcp_bridge: None,
            confirmation_bridge: Arc::new(crate::confirmation::AutoApprove),
            event_sink: None,
            middleware: Vec::new(),
        }
    }

    pub fn cwd(mut self, cwd: impl Into<std::path::PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    pub fn with_handler(mut self, name: impl Into<String>, handler: Arc<dyn ToolHandler>) -> Self {
        self.handlers.insert(name.into(), handler);
        self
    }

    pub fn with_client_bridge(mut self, bridge: Arc<dyn ClientBridge>) -> Self {
        self.client_bridge = Some(bridge);
        self
    }

    pub fn with_mcp_bridge(mut self, bridge: Arc<dyn McpBridge>) -> Self {
        self.mcp_bridge = Some(bridge);
        self
    }

    pub fn with_confirmation_bridge(mut self, bridge: Arc<dyn ConfirmationBridge>) -> Self {
        self.confirmation_bridge = bridge;
        self
    }

    /// Wires a sink notified when a call suspends awaiting confirmation
    /// (§4.4 step 3's `confirmation_required` event). Typically a bridge
    /// into the engine's lifecycle event stream (`core/loop`'s `EventEmitter`
    /// is multi-producer for exactly this reason).
    pub fn with_event_sink(mut self, sink: Arc<dyn ToolEventSink>) -> Self {
        self.event_sink = Some(sink);
        self
    }

    pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    pub fn build(self) -> ToolExecutor {
        ToolExecutor {
            com: self.com,
            session_id: self.session_id,
            cwd: self.cwd,
            handlers: self.handlers,
            client_bridge: self.client_bridge,
            mcp_bridge: self.mcp_bridge,
            confirmation_bridge: self.confirmation_bridge,
            event_sink: self.event_sink,
            middleware: self.middleware,
        }
    }
}

impl ToolExecutor {
    pub fn builder(com: Com, session_id: impl Into<String>) -> ToolExecutorBuilder {
        ToolExecutorBuilder::new(com, session_id)
    }

    /// Execute a batch of completed tool calls and return the
    /// `TimelineEntry::ToolResult` entries, one per call, in input order.
    /// Entries sharing a `concurrency_group` run sequentially; everything
    /// else runs concurrently via `join_all` (§4.4, §5).
    pub async fn execute_tool_calls(&self, calls: Vec<CompletedToolCall>) -> Vec<TimelineEntry> {
        let mut grouped: Vec<Vec<CompletedToolCall>> = Vec::new();
        let mut groups_by_key: HashMap<String, usize> = HashMap::new();

        for call in calls {
            let group_key = self.com.resolve_tool(&call.name).await.and_then(|t| t.concurrency_group);
            match group_key {
                Some(key) => {
                    let idx = *groups_by_key.entry(key).or_insert_with(|| {
                        grouped.push(Vec::new());
                        grouped.len() - 1
                    });
                    grouped[idx].push(call);
                }
                None => grouped.push(vec![call]),
            }
        }

        let futures = grouped.into_iter().map(|group| self.run_group(group));
        let results = join_all(futures).await;
        results.into_iter().flatten().collect()
    }

    /// Runs every call in a concurrency group sequentially, preserving order.
    async fn run_group(&self, group: Vec<CompletedToolCall>) -> Vec<TimelineEntry> {
        let mut entries = Vec::with_capacity(group.len());
        for call in group {
            entries.push(self.execute_one(call).await);
        }
        entries
    }

    async fn execute_one(&self, call: CompletedToolCall) -> TimelineEntry {
        let outcome = self.dispatch(&call).await;
        match outcome {
            Ok(output) if !output.is_error => TimelineEntry::tool_result_ok(call.id, output.content),
            Ok(output) => TimelineEntry::tool_result_err(call.id, output.content, ToolResultErrorKind::ApplicationError),
            Err(err) => {
                let kind = result_kind_for(&err);
                debug!(tool = %call.name, call_id = %call.id, error = %err, ?kind, "tool call failed");
                TimelineEntry::tool_result_err(call.id, vec![text_block(err.to_string())], kind)
            }
        }
    }

    async fn dispatch(&self, call: &CompletedToolCall) -> Result<ToolOutput, ToolError> {
        // Step 1: resolution by name, falling back to the alias index.
        let metadata = self
            .com
            .resolve_tool(&call.name)
            .await
            .ok_or_else(|| crate::error::tool_error::NotFoundSnafu { name: call.name.clone() }.build())?;

        // Step 2: schema validation.
        validate_input(&metadata, &call.input)?;

        // Step 3: confirmation policy.
        if metadata.confirmation.requires_confirmation(&call.input) {
            if let Some(sink) = &self.event_sink {
                sink.confirmation_required(&call.id, &metadata.name, &call.input, None).await;
            }
            let ctx = self.context_for(call);
            let outcome =
                confirm_with_timeout(self.confirmation_bridge.as_ref(), &metadata.name, &call.input, &ctx, metadata.timeout).await;
            match outcome {
                ConfirmationOutcome::Approved => {}
                ConfirmationOutcome::Denied => {
                    return crate::error::tool_error::UserDeniedSnafu {
                        message: format!("confirmation denied for '{}'", metadata.name),
                    }
                    .fail();
                }
                ConfirmationOutcome::TimedOut => {
                    return crate::error::tool_error::ConfirmationTimeoutSnafu {
                        timeout_secs: metadata.timeout.as_secs(),
                    }
                    .fail();
                }
            }
        }

        let ctx = self.context_for(call);

        // Step 4: middleware `before`.
        let input = match run_before(&self.middleware, &metadata.name, call.input.clone(), &ctx).await {
            MiddlewareDecision::Proceed(input) => input,
            MiddlewareDecision::Reject(reason) => {
                return crate::error::tool_error::MiddlewareRejectedSnafu { reason }.fail();
            }
        };

        // Step 5: execution-kind routing.
        let output = match metadata.execution_kind {
            ExecutionKind::Server => self.dispatch_server(&metadata, input, &ctx).await?,
            ExecutionKind::Client => self.dispatch_client(&metadata, input, &ctx).await?,
            ExecutionKind::Provider => ToolOutput::empty(),
            ExecutionKind::Mcp => self.dispatch_mcp(&metadata, input, &ctx).await?,
        };

        // Step 6: middleware `after`.
        Ok(run_after(&self.middleware, &metadata.name, output, &ctx).await)
    }

    async fn dispatch_server(&self, metadata: &ToolMetadata, input: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        let handler = self.handlers.get(&metadata.name).ok_or_else(|| {
            crate::error::tool_error::InternalSnafu {
                message: format!("no SERVER handler wired for '{}'", metadata.name),
            }
            .build()
        })?;
        tokio::time::timeout(metadata.timeout, handler.call(input, ctx))
            .await
            .map_err(|_| crate::error::tool_error::TimeoutSnafu { timeout_secs: metadata.timeout.as_secs() }.build())?
    }

    async fn dispatch_client(&self, metadata: &ToolMetadata, input: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        let bridge = self
            .client_bridge
            .as_ref()
            .ok_or_else(|| crate::error::tool_error::InternalSnafu { message: "no CLIENT bridge wired".to_string() }.build())?;
        let mode = if metadata.requires_response {
            ClientResponse::RequiresResponse
        } else {
            ClientResponse::FireAndForget
        };
        tokio::time::timeout(
            metadata.timeout,
            crate::client_bridge::dispatch(bridge.as_ref(), &metadata.name, input, ctx, mode, metadata.default_result.as_ref()),
        )
        .await
        .map_err(|_| crate::error::tool_error::TimeoutSnafu { timeout_secs: metadata.timeout.as_secs() }.build())?
    }

    async fn dispatch_mcp(&self, metadata: &ToolMetadata, input: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        let bridge = self
            .mcp_bridge
            .as_ref()
            .ok_or_else(|| crate::error::tool_error::InternalSnafu { message: "no MCP bridge wired".to_string() }.build())?;
        tokio::time::timeout(metadata.timeout, bridge.call(&metadata.name, input, ctx))
            .await
            .map_err(|_| crate::error::tool_error::TimeoutSnafu { timeout_secs: metadata.timeout.as_secs() }.build())?
    }

    fn context_for(&self, call: &CompletedToolCall) -> ToolContext {
        ToolContext::builder(call.id.clone(), self.session_id.clone()).cwd(self.cwd.clone()).build()
    }
}

fn validate_input(metadata: &ToolMetadata, input: &Value) -> Result<(), ToolError> {
    let schema = JSONSchema::compile(&metadata.parameters).map_err(|e| {
        crate::error::tool_error::InternalSnafu {
            message: format!("invalid schema for '{}': {e}", metadata.name),
        }
        .build()
    })?;
    if let Err(errors) = schema.validate(input) {
        let message = errors.map(|e| e.to_string()).collect::<Vec<_>>().join("; ");
        return crate::error::tool_error::InvalidInputSnafu { message }.fail();
    }
    Ok(())
}

/// Maps a fatal executor-side error to the non-fatal, model-visible
/// classification carried on `TimelineEntry::ToolResult` (§4.4 error table).
pub fn result_kind_for(err: &ToolError) -> ToolResultErrorKind {
    match err {
        ToolError::NotFound { .. } => ToolResultErrorKind::ToolNotFound,
        ToolError::InvalidInput { .. } => ToolResultErrorKind::ValidationError,
        ToolError::Timeout { .. } => ToolResultErrorKind::TimeoutError,
        ToolError::Aborted { .. } | ToolError::Cancelled { .. } => ToolResultErrorKind::AbortError,
        ToolError::NetworkError { .. } => ToolResultErrorKind::NetworkError,
        ToolError::RateLimited { .. } => ToolResultErrorKind::RateLimitError,
        ToolError::AuthError { .. } => ToolResultErrorKind::AuthError,
        ToolError::PermissionDenied { .. } => ToolResultErrorKind::AuthError,
        ToolError::UserDenied { .. } => ToolResultErrorKind::UserDenied,
        ToolError::ConfirmationTimeout { .. } => ToolResultErrorKind::ConfirmationTimeout,
        ToolError::MiddlewareRejected { .. } => ToolResultErrorKind::ApplicationError,
        ToolError::Io { .. } | ToolError::Internal { .. } | ToolError::ExecutionFailed { .. } => ToolResultErrorKind::UnknownError,
    }
}

#[cfg(test)]
#[path = "executor.test.rs"]
mod tests;
