//! Tool metadata and the COM's tool registry (§3 "Tool metadata", §4.1
//! failure semantics).

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::error::ComError;
use crate::error::Result;
use crate::error::com_error::ToolRegistrationConflictSnafu;
use crate::section::Audience;

/// How a tool call is actually carried out (§4.4 routing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionKind {
    /// Runs in-process against COM + injected dependencies.
    Server,
    /// Requires a round trip to the client surface.
    Client,
    /// Already executed by the provider; the result is embedded in the
    /// model response and the kernel does not re-execute it.
    Provider,
    /// Delegated to an MCP server.
    Mcp,
}

/// What kind of effect invoking the tool has, for UI/approval heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Render,
    Action,
    Compute,
}

/// Whether a `CLIENT` tool call expects a result to come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientResponse {
    RequiresResponse,
    FireAndForget,
}

/// Static bool or a predicate over the call's input.
#[derive(Clone)]
pub enum ConfirmationPolicy {
    Always,
    Never,
    Predicate(Arc<dyn Fn(&Value) -> bool + Send + Sync>),
}

impl fmt::Debug for ConfirmationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmationPolicy::Always => write!(f, "ConfirmationPolicy::Always"),
            ConfirmationPolicy::Never => write!(f, "ConfirmationPolicy::Never"),
            ConfirmationPolicy::Predicate(_) => write!(f, "ConfirmationPolicy::Predicate(..)"),
        }
    }
}

impl ConfirmationPolicy {
    pub fn requires_confirmation(&self, input: &Value) -> bool {
        match self {
            ConfirmationPolicy::Always => true,
            ConfirmationPolicy::Never => false,
            ConfirmationPolicy::Predicate(p) => p(input),
        }
    }
}

/// Tool metadata (§3). `name` is unique across tools of `audience=model`;
/// aliases live in a separate first-wins index.
#[derive(Clone)]
pub struct ToolMetadata {
    pub name: String,
    pub description: String,
    pub parameters: Value,
    pub execution_kind: ExecutionKind,
    pub intent: Intent,
    pub audience: Audience,
    pub aliases: Vec<String>,
    pub confirmation: ConfirmationPolicy,
    pub timeout: Duration,
    pub default_result: Option<Value>,
    pub provider_options: Option<Value>,
    /// Whether a `CLIENT` call waits for the client's result before the
    /// tick proceeds, or fires and immediately returns `default_result`
    /// (§4.4 "Client tool dispatch"). Ignored for non-`Client` execution
    /// kinds.
    pub requires_response: bool,
    /// Tool calls sharing a concurrency group run sequentially relative to
    /// each other (§4.4 "Concurrency"); `None` means fully parallel.
    pub concurrency_group: Option<String>,
}

impl fmt::Debug for ToolMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolMetadata")
            .field("name", &self.name)
            .field("execution_kind", &self.execution_kind)
            .field("audience", &self.audience)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}

pub const DEFAULT_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(30);

impl ToolMetadata {
    pub fn new(name: impl Into<String>, execution_kind: ExecutionKind) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parameters: serde_json::json!({"type": "object", "properties": {}}),
            execution_kind,
            intent: Intent::Action,
            audience: Audience::Model,
            aliases: Vec::new(),
            confirmation: ConfirmationPolicy::Never,
            timeout: DEFAULT_CONFIRMATION_TIMEOUT,
            default_result: None,
            provider_options: None,
            requires_response: true,
            concurrency_group: None,
        }
    }
}

/// Registry of tool metadata keyed by name, with a separate alias index.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, ToolMetadata>,
    aliases: HashMap<String, String>,
    order: Vec<String>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Duplicate names are a hard error
    /// (`ToolRegistrationConflict`); duplicate aliases are first-wins and
    /// silently ignored for the later registrant.
    pub fn register(&mut self, tool: ToolMetadata) -> Result<()> {
        if self.tools.contains_key(&tool.name) {
            return ToolRegistrationConflictSnafu { name: tool.name }.fail();
        }
        for alias in &tool.aliases {
            self.aliases.entry(alias.clone()).or_insert_with(|| tool.name.clone());
        }
        self.order.push(tool.name.clone());
        self.tools.insert(tool.name.clone(), tool);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ToolMetadata> {
        self.tools.get(name)
    }

    pub fn get_by_alias(&self, alias: &str) -> Option<&ToolMetadata> {
        self.aliases.get(alias).and_then(|name| self.tools.get(name))
    }

    /// Resolve by name, falling back to the alias index (§4.4 step 1).
    pub fn resolve(&self, name_or_alias: &str) -> Option<&ToolMetadata> {
        self.get(name_or_alias).or_else(|| self.get_by_alias(name_or_alias))
    }

    /// All tools in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolMetadata> {
        self.order.iter().filter_map(|name| self.tools.get(name))
    }

    /// Tools visible to the model (`audience=model`), for `to_input()`.
    pub fn model_visible(&self) -> impl Iterator<Item = &ToolMetadata> {
        self.iter().filter(|t| t.audience == Audience::Model)
    }
}

#[cfg(test)]
#[path = "tool.test.rs"]
mod tests;
