//! In-memory spec source for testing.

use fabgen_core::{
    application::ports::SpecSource,
    domain::{SpecKind, SpecificationSet},
    error::FabgenResult,
};

/// Serves a pre-built [`SpecificationSet`], or a scripted error.
#[derive(Debug, Clone, Default)]
pub struct MemorySpecSource {
    set: SpecificationSet,
}

impl MemorySpecSource {
    /// A source with no documents at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(set: SpecificationSet) -> Self {
        Self { set }
    }

    /// Fluent document insertion for test construction.
    pub fn with(mut self, kind: SpecKind, text: impl Into<String>) -> Self {
        self.set.insert(kind, text);
        self
    }
}

impl SpecSource for MemorySpecSource {
    fn load(&self) -> FabgenResult<SpecificationSet> {
        Ok(self.set.clone())
    }
}
