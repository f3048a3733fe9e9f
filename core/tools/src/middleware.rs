//! Middleware onion composition around tool execution (§4.4 "Middleware").
//!
//! Middlewares wrap the handler call: every `before` runs outermost-first,
//! then the handler, then every `after` runs innermost-first. A `before`
//! that rejects short-circuits the call without invoking the handler or any
//! remaining middleware.

use async_trait::async_trait;
use serde_json::Value;

use crate::context::ToolContext;
use crate::tool::ToolOutput;

/// Outcome of a middleware's `before` stage.
#[derive(Debug, Clone)]
pub enum MiddlewareDecision {
    /// Proceed with (possibly rewritten) input.
    Proceed(Value),
    /// Reject the call before it reaches the handler.
    Reject(String),
}

#[async_trait]
pub trait Middleware: Send + Sync {
    /// Called before the handler, outermost middleware first.
    async fn before(&self, tool_name: &str, input: Value, ctx: &ToolContext) -> MiddlewareDecision {
        let _ = (tool_name, ctx);
        MiddlewareDecision::Proceed(input)
    }

    /// Called after the handler produced (or failed to produce) output,
    /// innermost middleware first. May rewrite the output.
    async fn after(&self, tool_name: &str, output: ToolOutput, ctx: &ToolContext) -> ToolOutput {
        let _ = (tool_name, ctx);
        output
    }
}

/// Runs `before` outermost-first over the chain, short-circuiting on the
/// first rejection.
pub async fn run_before(
    chain: &[std::sync::Arc<dyn Middleware>],
    tool_name: &str,
    input: Value,
    ctx: &ToolContext,
) -> MiddlewareDecision {
    let mut current = input;
    for mw in chain {
        match mw.before(tool_name, current, ctx).await {
            MiddlewareDecision::Proceed(next) => current = next,
            rejected @ MiddlewareDecision::Reject(_) => return rejected,
        }
    }
    MiddlewareDecision::Proceed(current)
}

/// Runs `after` innermost-first (i.e. reverse chain order).
pub async fn run_after(
    chain: &[std::sync::Arc<dyn Middleware>],
    tool_name: &str,
    output: ToolOutput,
    ctx: &ToolContext,
) -> ToolOutput {
    let mut current = output;
    for mw in chain.iter().rev() {
        current = mw.after(tool_name, current, ctx).await;
    }
    current
}

#[cfg(test)]
#[path = "middleware.test.rs"]
mod tests;
