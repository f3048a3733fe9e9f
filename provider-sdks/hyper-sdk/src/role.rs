//! Message role, shared across every provider's wire format (§3, §6).

use serde::Deserialize;
use serde::Serialize;

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions/context.
    System,
    /// User input.
    User,
    /// Assistant response.
    Assistant,
    /// Tool/function result.
    Tool,
}

#[cfg(test)]
#[path = "role.test.rs"]
mod tests;
