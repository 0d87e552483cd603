//! Presentation boundary for catalog rendering.
//!
//! # Responsibility
//! - Define the container contract the catalog renders into.
//! - Provide a line-oriented container for terminal output and tests.
//!
//! # Invariants
//! - The catalog owns the container's content, never its creation.

/// One rendered catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRecord {
    pub id: String,
    pub network_operator: String,
}

/// Target the catalog renders into.
pub trait RecordContainer {
    /// Removes every item the container currently holds.
    fn clear(&mut self);
    /// Appends one rendered entry after the existing items.
    fn append(&mut self, item: RenderedRecord);
}

/// Container that accumulates rendered entries in memory.
#[derive(Debug, Default)]
pub struct TextContainer {
    items: Vec<RenderedRecord>,
}

impl TextContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[RenderedRecord] {
        &self.items
    }

    /// Renders each entry as `<id> <operator>` for terminal output.
    pub fn lines(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| format!("{} {}", item.id, item.network_operator))
            .collect()
    }
}

impl RecordContainer for TextContainer {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn append(&mut self, item: RenderedRecord) {
        self.items.push(item);
    }
}
