//! The output of one compilation pass (§4.2): an immutable snapshot of the
//! COM's sections, timeline, and tools at the moment a pass stabilized.

use agentick_com::Section;
use agentick_com::TimelineEntry;
use agentick_com::ToolMetadata;

/// Compiled structure produced by a single `compile_until_stable` pass.
/// Immutable once returned — a later pass produces a new value rather than
/// mutating this one.
#[derive(Debug, Clone)]
pub struct CompiledStructure {
    pub sections: Vec<Section>,
    pub timeline: Vec<TimelineEntry>,
    pub tools: Vec<ToolMetadata>,
    pub system_entries: Vec<String>,
    /// Section ids that collided during this pass (last-write-wins;
    /// logged, not fatal — §4.1 failure semantics).
    pub section_collisions: Vec<String>,
}
