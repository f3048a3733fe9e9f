//! Model adapter contract (§6): the seam between the engine's normalized
//! state and a concrete provider's wire format.
//!
//! This module defines the contract only — no concrete provider adapter.
//! The core's Non-goals exclude implementing provider adapters; what the
//! engine needs is the shape adapters must satisfy so `core/loop` can drive
//! any of them identically.

use agentick_accumulator::AdapterDelta;
use async_trait::async_trait;
use futures::stream::BoxStream;
use serde_json::Value;
use std::collections::HashMap;

use crate::role::Role;

/// One projected message in a [`ModelInput`]: a role/content pair taken
/// from the timeline.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InputMessage {
    pub role: Role,
    pub content: String,
}

/// A tool definition as adapters see it: name, description, and a JSON
/// Schema for its parameters. `intent` documents when the model should
/// reach for the tool; `provider_options` carries adapter-specific extras
/// (e.g. OpenAI's `strict` flag) the engine itself never interprets.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
    pub intent: Option<String>,
    pub provider_options: Option<Value>,
}

/// Engine-normalized input to a model call: the timeline projected to
/// role/content pairs, the tools available to the model, compiled
/// sections keyed by id, and free-form metadata.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ModelInput {
    pub messages: Vec<InputMessage>,
    pub tools: Vec<ToolDefinition>,
    pub sections: HashMap<String, String>,
    pub metadata: HashMap<String, Value>,
}

/// Engine-normalized model output, once a provider's response has been
/// mapped back through [`ModelAdapter::to_engine_state`].
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ModelOutput {
    pub text: Option<String>,
    pub metadata: HashMap<String, Value>,
}

/// What the engine routes back into COM after a tick, once
/// [`ModelAdapter::to_engine_state`] has run.
#[derive(Debug, Clone, Default)]
pub struct EngineResponse {
    pub text: Option<String>,
    pub metadata: HashMap<String, Value>,
}

/// A stream of provider-native chunks, already mapped through
/// [`ModelAdapter::map_chunk`] into the accumulator's alphabet by the
/// caller — see [`ModelAdapter::execute_stream`].
pub type DeltaStream = BoxStream<'static, AdapterDelta>;

/// Contract a provider adapter must satisfy (§6). `ProviderInput`,
/// `ProviderChunk`, and `ProviderOutput` are adapter-specific associated
/// types; the engine only ever sees [`ModelInput`]/[`AdapterDelta`]/
/// [`ModelOutput`] on either side of the seam.
#[async_trait]
pub trait ModelAdapter: Send + Sync {
    /// Adapter-specific request shape built from [`ModelInput`].
    type ProviderInput: Send;
    /// Adapter-specific streamed chunk shape.
    type ProviderChunk: Send;
    /// Adapter-specific non-streamed response shape.
    type ProviderOutput: Send;

    /// Identifies this adapter in logs and error messages (e.g. `"openai"`).
    fn name(&self) -> &str;

    /// Translates engine-normalized input into this provider's request
    /// shape.
    fn prepare_input(&self, input: ModelInput) -> crate::error::Result<Self::ProviderInput>;

    /// Streams the model's response chunk by chunk. Adapters that support
    /// streaming implement this; non-streaming adapters fall back to
    /// wrapping [`Self::execute`] in a single-item stream.
    async fn execute_stream(
        &self,
        input: Self::ProviderInput,
    ) -> crate::error::Result<BoxStream<'static, Self::ProviderChunk>>;

    /// Runs the model to completion without streaming.
    async fn execute(&self, input: Self::ProviderInput) -> crate::error::Result<Self::ProviderOutput>;

    /// Normalizes one provider chunk into the accumulator's delta
    /// alphabet, or `None` if the chunk carries nothing the accumulator
    /// needs to see (e.g. a provider keep-alive ping).
    fn map_chunk(&self, chunk: Self::ProviderChunk) -> Option<AdapterDelta>;

    /// Projects engine state into this adapter's [`ModelInput`]. Default
    /// identity: the input is already in engine shape, with role/tool
    /// mapping left to the caller that builds `input`.
    fn from_engine_state(&self, input: ModelInput) -> ModelInput {
        input
    }

    /// Projects a completed [`ModelOutput`] back into an
    /// [`EngineResponse`]. Default identity.
    fn to_engine_state(&self, output: ModelOutput) -> EngineResponse {
        EngineResponse {
            text: output.text,
            metadata: output.metadata,
        }
    }
}

#[cfg(test)]
#[path = "adapter.test.rs"]
mod tests;
