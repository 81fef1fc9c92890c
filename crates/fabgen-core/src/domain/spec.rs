//! Specification documents and the per-run specification set.
//!
//! A pipeline run consumes up to three named markdown documents from the
//! specification directory. Absence of any individual document is a normal,
//! non-error condition: extraction falls back to defaults for whatever is
//! missing.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of specification documents the pipeline knows about.
///
/// `ProductRequirements` is the *primary* document: the component catalog,
/// the feature list, and the connection trigger all key off its presence.
/// `Dashboard` is the *secondary* document scanned for equipment
/// identifiers. `ProductConfig` is read for completeness and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecKind {
    Dashboard,
    ProductRequirements,
    ProductConfig,
}

impl SpecKind {
    /// All kinds, in the order they are read and reported.
    pub const ALL: [SpecKind; 3] = [
        SpecKind::Dashboard,
        SpecKind::ProductRequirements,
        SpecKind::ProductConfig,
    ];

    /// The filename this document is loaded from inside the spec directory.
    pub fn filename(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard_spec.md",
            Self::ProductRequirements => "PRD.md",
            Self::ProductConfig => "product_config_spec.md",
        }
    }
}

impl fmt::Display for SpecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dashboard => write!(f, "dashboard"),
            Self::ProductRequirements => write!(f, "product-requirements"),
            Self::ProductConfig => write!(f, "product-config"),
        }
    }
}

/// The documents loaded for one pipeline run.
///
/// Immutable once constructed; extraction borrows it and never mutates.
#[derive(Debug, Clone, Default)]
pub struct SpecificationSet {
    documents: HashMap<SpecKind, String>,
}

impl SpecificationSet {
    /// An empty set (no documents found). Extraction over an empty set
    /// yields an entirely defaulted requirement record.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Insert a document that was successfully read.
    pub fn insert(&mut self, kind: SpecKind, text: impl Into<String>) {
        self.documents.insert(kind, text.into());
    }

    /// Fluent variant of [`Self::insert`] for construction in tests.
    pub fn with(mut self, kind: SpecKind, text: impl Into<String>) -> Self {
        self.insert(kind, text);
        self
    }

    /// The raw text of a document, if it was present.
    pub fn get(&self, kind: SpecKind) -> Option<&str> {
        self.documents.get(&kind).map(String::as_str)
    }

    pub fn contains(&self, kind: SpecKind) -> bool {
        self.documents.contains_key(&kind)
    }

    /// Number of documents actually loaded (0..=3).
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Kinds that were present, in canonical order.
    pub fn present_kinds(&self) -> Vec<SpecKind> {
        SpecKind::ALL
            .into_iter()
            .filter(|k| self.contains(*k))
            .collect()
    }
}
