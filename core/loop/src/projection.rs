//! Projects compiled COM state into a [`hyper_sdk::ModelInput`] (§6
//! `fromEngineState`): the timeline flattened to role/content pairs, tools
//! to [`hyper_sdk::ToolDefinition`]s, and sections to an id→content map.

use std::collections::HashMap;

use agentick_accumulator::ContentBlock;
use agentick_com::ComInput;
use agentick_com::Section;
use agentick_com::TimelineEntry;
use agentick_com::ToolMetadata;
use hyper_sdk::InputMessage;
use hyper_sdk::ModelInput;
use hyper_sdk::Role;
use hyper_sdk::ToolDefinition;
use serde_json::Value;

/// Flattens a block sequence into plain text for adapters that don't need
/// structured content — text and reasoning contribute their text verbatim,
/// tool calls and raw blocks are rendered as a compact tag so the model
/// still sees *that* a tool ran even in adapters with no richer channel.
pub fn flatten_content(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            ContentBlock::Text { text, .. } => text.clone(),
            ContentBlock::Reasoning { text, .. } => text.clone(),
            ContentBlock::ToolUse { id, name, input, .. } => {
                format!("<tool_call id=\"{id}\" name=\"{name}\">{input}</tool_call>")
            }
            ContentBlock::Raw { value, .. } => value.to_string(),
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Projects the timeline into ordered role/content pairs. Tool-use and
/// tool-result entries don't carry a `Message` role of their own in the
/// timeline, so they're given the roles a model expects to see them
/// under: the call as something the assistant did, the result as
/// something the tool reported back.
pub fn project_timeline(timeline: &[TimelineEntry]) -> Vec<InputMessage> {
    timeline
        .iter()
        .map(|entry| match entry {
            TimelineEntry::Message { role, content, .. } => InputMessage {
                role: *role,
                content: flatten_content(content),
            },
            TimelineEntry::ToolUse { id, name, input, .. } => InputMessage {
                role: Role::Assistant,
                content: format!("<tool_use id=\"{id}\" name=\"{name}\">{input}</tool_use>"),
            },
            TimelineEntry::ToolResult {
                tool_use_id,
                success,
                content,
                error_kind,
            } => {
                let error_attr = error_kind.map(|k| format!(" error_kind=\"{k:?}\"")).unwrap_or_default();
                InputMessage {
                    role: Role::Tool,
                    content: format!(
                        "<tool_result tool_use_id=\"{tool_use_id}\" success=\"{success}\"{error_attr}>{}</tool_result>",
                        flatten_content(content)
                    ),
                }
            }
        })
        .collect()
}

pub fn project_tools(tools: &[ToolMetadata]) -> Vec<ToolDefinition> {
    tools
        .iter()
        .map(|tool| ToolDefinition {
            name: tool.name.clone(),
            description: tool.description.clone(),
            parameters: tool.parameters.clone(),
            intent: Some(format!("{:?}", tool.intent)),
            provider_options: tool.provider_options.clone(),
        })
        .collect()
}

pub fn project_sections(sections: &[Section]) -> HashMap<String, String> {
    sections.iter().map(|s| (s.id.clone(), flatten_content(&s.content))).collect()
}

fn project_metadata(metadata: &Value) -> HashMap<String, Value> {
    match metadata {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        Value::Null => HashMap::new(),
        other => HashMap::from([("value".to_string(), other.clone())]),
    }
}

/// Builds the [`ModelInput`] the engine hands to the model adapter for one
/// tick (§4.6 step 4), from the structure a compile pass produced.
///
/// `system_entries` has no dedicated `ModelInput` field in §6 (`messages`,
/// `tools`, `sections`, `metadata` only) — folded into `sections["system"]`
/// rather than dropped, since components do populate it (see
/// `Com::set_system_entries`).
pub fn build_model_input(com_input: &ComInput) -> ModelInput {
    let mut sections = project_sections(&com_input.sections);
    if !com_input.system_entries.is_empty() {
        sections.insert("system".to_string(), com_input.system_entries.join("\n"));
    }
    ModelInput {
        messages: project_timeline(&com_input.timeline),
        tools: project_tools(&com_input.tools),
        sections,
        metadata: project_metadata(&com_input.metadata),
    }
}

#[cfg(test)]
#[path = "projection.test.rs"]
mod tests;
