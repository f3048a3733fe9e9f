//! Content blocks and their metadata bag.

use serde_json::Map;
use serde_json::Value;

/// Metadata bag attached to a content block (§3 "Content block").
///
/// Merge rule (§4.3): arrays (citations, annotations) concatenate; scalars
/// (language, mimeType) — incoming wins; extensions — shallow object merge.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BlockMetadata {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extensions: Map<String, Value>,
}

impl BlockMetadata {
    pub fn merge(&mut self, incoming: &BlockMetadata) {
        self.citations.extend(incoming.citations.iter().cloned());
        self.annotations
            .extend(incoming.annotations.iter().cloned());
        if incoming.language.is_some() {
            self.language = incoming.language.clone();
        }
        if incoming.mime_type.is_some() {
            self.mime_type = incoming.mime_type.clone();
        }
        for (k, v) in &incoming.extensions {
            self.extensions.insert(k.clone(), v.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
            && self.annotations.is_empty()
            && self.language.is_none()
            && self.mime_type.is_none()
            && self.extensions.is_empty()
    }
}

/// A finalized content block, produced once its lifecycle closes.
///
/// Tagged union per §3: text | reasoning | tool_use | tool_result | raw.
/// The accumulator never produces `tool_result` blocks itself — those are
/// appended to the timeline by the tool executor — so this enum only carries
/// the variants the model stream itself can terminate.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        block_index: u64,
        text: String,
        #[serde(default, skip_serializing_if = "BlockMetadata::is_empty")]
        metadata: BlockMetadata,
    },
    Reasoning {
        block_index: u64,
        text: String,
        #[serde(default, skip_serializing_if = "BlockMetadata::is_empty")]
        metadata: BlockMetadata,
    },
    ToolUse {
        block_index: u64,
        id: String,
        name: String,
        input: Value,
    },
    Raw {
        block_index: u64,
        value: Value,
    },
}

impl ContentBlock {
    pub fn block_index(&self) -> u64 {
        match self {
            ContentBlock::Text { block_index, .. }
            | ContentBlock::Reasoning { block_index, .. }
            | ContentBlock::ToolUse { block_index, .. }
            | ContentBlock::Raw { block_index, .. } => *block_index,
        }
    }
}

/// A completed tool call, as assembled by [`crate::Accumulator::to_model_output`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompletedToolCall {
    pub id: String,
    pub name: String,
    pub input: Value,
}
