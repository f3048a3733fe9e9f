//! Tool execution context (§4.4).
//!
//! Deliberately narrow: just what a `SERVER` handler or bridge needs to
//! identify and scope a single call. Permission/approval bookkeeping lives
//! in the executor's middleware chain instead of on the context itself.

use std::path::PathBuf;

use tokio_util::sync::CancellationToken;

/// Context for a single tool call.
#[derive(Clone)]
pub struct ToolContext {
    /// Unique ID for this call (matches the originating `CompletedToolCall::id`).
    pub call_id: String,
    /// Session ID the call belongs to.
    pub session_id: String,
    /// Working directory for path resolution.
    pub cwd: PathBuf,
    /// Cancellation token for aborting execution mid-call.
    pub cancel_token: CancellationToken,
}

impl ToolContext {
    pub fn new(call_id: impl Into<String>, session_id: impl Into<String>, cwd: PathBuf) -> Self {
        Self {
            call_id: call_id.into(),
            session_id: session_id.into(),
            cwd,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn builder(call_id: impl Into<String>, session_id: impl Into<String>) -> ToolContextBuilder {
        ToolContextBuilder::new(call_id, session_id)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    pub async fn cancelled(&self) {
        self.cancel_token.cancelled().await
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            path
        } else {
            self.cwd.join(path)
        }
    }
}

impl std::fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext")
            .field("call_id", &self.call_id)
            .field("session_id", &self.session_id)
            .field("cwd", &self.cwd)
            .field("is_cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Builder for [`ToolContext`].
pub struct ToolContextBuilder {
    call_id: String,
    session_id: String,
    cwd: PathBuf,
    cancel_token: CancellationToken,
}

impl ToolContextBuilder {
    pub fn new(call_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            session_id: session_id.into(),
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/")),
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    pub fn cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    pub fn build(self) -> ToolContext {
        ToolContext {
            call_id: self.call_id,
            session_id: self.session_id,
            cwd: self.cwd,
            cancel_token: self.cancel_token,
        }
    }
}

#[cfg(test)]
#[path = "context.test.rs"]
mod tests;
