//! Tool execution (§4.4): resolving a completed tool call against the COM's
//! tool registry, validating its input, gating it behind confirmation and
//! middleware, routing it by execution kind, and mapping any failure into a
//! non-fatal `TimelineEntry::ToolResult`.

mod client_bridge;
mod confirmation;
mod context;
mod error;
mod executor;
mod mcp_bridge;
mod middleware;
mod tool;

pub use client_bridge::ClientBridge;
pub use confirmation::AutoApprove;
pub use confirmation::ConfirmationBridge;
pub use confirmation::ConfirmationDecision;
pub use confirmation::ToolEventSink;
pub use context::ToolContext;
pub use context::ToolContextBuilder;
pub use error::Result;
pub use error::ToolError;
pub use executor::ToolExecutor;
pub use executor::ToolExecutorBuilder;
pub use executor::result_kind_for;
pub use mcp_bridge::McpBridge;
pub use middleware::Middleware;
pub use middleware::MiddlewareDecision;
pub use tool::ToolHandler;
pub use tool::ToolOutput;
pub use tool::text_block;
