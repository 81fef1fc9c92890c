//! Generated artifacts and the target tree layout.
//!
//! An artifact is one source file destined for the generated project. It
//! is constructed in memory by the catalog, written once by the artifact
//! writer, and not retained afterward.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::error::DomainError;

/// Directory for generated components, relative to the project root.
pub const COMPONENTS_DIR: &str = "src/components";

/// Directory for shared UI primitives, relative to the project root.
pub const UI_DIR: &str = "src/components/ui";

/// The root wiring file that imports and composes every component.
pub const WIRING_FILE: &str = "src/App.tsx";

/// One generated source file: a project-relative path plus its complete
/// source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub path: PathBuf,
    pub source: String,
}

impl GeneratedArtifact {
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }

    /// A component artifact at `src/components/<name>.tsx`.
    pub fn component(name: &str, source: impl Into<String>) -> Self {
        Self::new(
            Path::new(COMPONENTS_DIR).join(format!("{name}.tsx")),
            source,
        )
    }

    /// A shared primitive at `src/components/ui/<file>`.
    pub fn ui_primitive(file: &str, source: impl Into<String>) -> Self {
        Self::new(Path::new(UI_DIR).join(file), source)
    }

    pub fn size(&self) -> usize {
        self.source.len()
    }
}

/// Validate an artifact batch before it reaches the writer.
///
/// Rejects absolute paths (artifacts are always project-relative) and
/// duplicate paths (two artifacts racing for one file would make the
/// last-write-wins contract depend on catalog iteration order).
pub fn validate_artifacts(artifacts: &[GeneratedArtifact]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for artifact in artifacts {
        if artifact.path.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: artifact.path.display().to_string(),
            });
        }
        if !seen.insert(&artifact.path) {
            return Err(DomainError::DuplicateArtifactPath {
                path: artifact.path.display().to_string(),
            });
        }
    }
    Ok(())
}
