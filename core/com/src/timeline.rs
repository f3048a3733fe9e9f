//! Timeline entries (§3 "Timeline entry").

use agentick_accumulator::ContentBlock;
use hyper_sdk::Role;
use serde_json::Value;

/// Non-fatal tool result failure classification (§4.4 error→result mapping,
/// §6 error kinds). Every tool call produces a [`TimelineEntry::ToolResult`]
/// — these kinds never propagate as a Rust `Err` out of the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolResultErrorKind {
    ToolNotFound,
    ToolNoHandler,
    ValidationError,
    UserDenied,
    ConfirmationTimeout,
    ClientTimeout,
    NetworkError,
    RateLimitError,
    AuthError,
    TimeoutError,
    AbortError,
    ApplicationError,
    UnknownError,
}

impl ToolResultErrorKind {
    /// Whether the failure is transient and worth a model-driven retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ToolResultErrorKind::NetworkError
                | ToolResultErrorKind::RateLimitError
                | ToolResultErrorKind::TimeoutError
                | ToolResultErrorKind::UnknownError
        )
    }
}

/// One entry in the session timeline (§3, append-only per tick).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineEntry {
    Message {
        role: Role,
        content: Vec<ContentBlock>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cached_tokens: Option<u64>,
    },
    ToolUse {
        id: String,
        name: String,
        input: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        assistant_block_index: Option<u64>,
    },
    ToolResult {
        tool_use_id: String,
        success: bool,
        content: Vec<ContentBlock>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error_kind: Option<ToolResultErrorKind>,
    },
}

impl TimelineEntry {
    pub fn message(role: Role, content: Vec<ContentBlock>) -> Self {
        TimelineEntry::Message {
            role,
            content,
            cached_tokens: None,
        }
    }

    pub fn tool_use(id: impl Into<String>, name: impl Into<String>, input: Value) -> Self {
        TimelineEntry::ToolUse {
            id: id.into(),
            name: name.into(),
            input,
            assistant_block_index: None,
        }
    }

    pub fn tool_result_ok(tool_use_id: impl Into<String>, content: Vec<ContentBlock>) -> Self {
        TimelineEntry::ToolResult {
            tool_use_id: tool_use_id.into(),
            success: true,
            content,
            error_kind: None,
        }
    }

    pub fn tool_result_err(
        tool_use_id: impl Into<String>,
        content: Vec<ContentBlock>,
        error_kind: ToolResultErrorKind,
    ) -> Self {
        TimelineEntry::ToolResult {
            tool_use_id: tool_use_id.into(),
            success: false,
            content,
            error_kind: Some(error_kind),
        }
    }
}
