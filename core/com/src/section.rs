//! Sections (§3 "Section"): addressable, ordered content the compiler
//! assembles into model input.

use agentick_accumulator::ContentBlock;

/// Who a section (or a tool) is visible to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Model,
    User,
}

/// An addressable, ordered span of content.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Section {
    pub id: String,
    pub content: Vec<ContentBlock>,
    pub audience: Audience,
}

impl Section {
    pub fn new(id: impl Into<String>, audience: Audience) -> Self {
        Self {
            id: id.into(),
            content: Vec::new(),
            audience,
        }
    }
}

/// Ordered, id-unique registry of sections.
///
/// Last-write-wins on id collision within a single compilation pass; the
/// registry itself just tracks the override so the compiler can log it
/// (§4.1 failure semantics, §3 COM invariants).
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    order: Vec<String>,
    sections: std::collections::HashMap<String, Section>,
}

/// Outcome of [`SectionRegistry::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Overridden,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a section, preserving its original position in
    /// iteration order when overridden.
    pub fn upsert(&mut self, section: Section) -> UpsertOutcome {
        let id = section.id.clone();
        if self.sections.insert(id.clone(), section).is_some() {
            UpsertOutcome::Overridden
        } else {
            self.order.push(id);
            UpsertOutcome::Inserted
        }
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.get(id)
    }

    /// Sections in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.order.iter().filter_map(|id| self.sections.get(id))
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.sections.clear();
    }
}
