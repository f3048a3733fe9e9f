//! The `SERVER` execution-kind handler contract (§4.4 step 4).
//!
//! `CLIENT`/`PROVIDER`/`MCP` routing lives in [`crate::client_bridge`] and
//! [`crate::mcp_bridge`] instead — only `SERVER` tools run an in-process
//! handler against `(input, deps)`, where `deps` here is the `ToolContext`
//! plus whatever the executor injected at construction time.

use async_trait::async_trait;
use agentick_accumulator::BlockMetadata;
use agentick_accumulator::ContentBlock;
use serde_json::Value;

use crate::context::ToolContext;
use crate::error::ToolError;

/// A `SERVER`-kind tool's in-process implementation.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, input: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError>;
}

/// What a handler/bridge produces for one call, before the executor wraps
/// it into a `TimelineEntry::ToolResult` (§3, §4.4).
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub content: Vec<ContentBlock>,
    pub is_error: bool,
}

impl ToolOutput {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![text_block(content.into())],
            is_error: false,
        }
    }

    pub fn structured(value: Value) -> Self {
        Self {
            content: vec![ContentBlock::Raw {
                block_index: 0,
                value,
            }],
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![text_block(message.into())],
            is_error: true,
        }
    }

    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            is_error: false,
        }
    }
}

/// A single-block text result. Tool output isn't part of the model stream,
/// so the block index carries no ordering meaning here — always 0.
pub fn text_block(text: String) -> ContentBlock {
    ContentBlock::Text {
        block_index: 0,
        text,
        metadata: BlockMetadata::default(),
    }
}

#[cfg(test)]
#[path = "tool.test.rs"]
mod tests;
