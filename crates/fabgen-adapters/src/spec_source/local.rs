//! Local filesystem spec source using std::fs.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use fabgen_core::{
    application::{ApplicationError, ports::SpecSource},
    domain::{SpecKind, SpecificationSet},
    error::FabgenResult,
};

/// Reads the named specification documents from a directory.
///
/// A missing individual file is a normal condition (logged at DEBUG,
/// absent from the set). A file that exists but cannot be read — a
/// permissions failure, not-UTF-8 content — is a real error.
#[derive(Debug, Clone)]
pub struct LocalSpecSource {
    spec_dir: PathBuf,
}

impl LocalSpecSource {
    pub fn new(spec_dir: impl Into<PathBuf>) -> Self {
        Self {
            spec_dir: spec_dir.into(),
        }
    }
}

impl SpecSource for LocalSpecSource {
    fn load(&self) -> FabgenResult<SpecificationSet> {
        let mut set = SpecificationSet::empty();

        if !self.spec_dir.is_dir() {
            // An absent directory behaves like a directory with no
            // documents: every field of the record falls back to defaults.
            warn!(dir = %self.spec_dir.display(), "specification directory not found");
            return Ok(set);
        }

        for kind in SpecKind::ALL {
            let path = self.spec_dir.join(kind.filename());
            if !path.is_file() {
                debug!(file = %path.display(), "specification document absent");
                continue;
            }

            let text = std::fs::read_to_string(&path).map_err(|e| {
                ApplicationError::SpecSource {
                    reason: format!("failed to read {}: {}", path.display(), e),
                }
            })?;
            info!(
                file = %path.display(),
                lines = text.lines().count(),
                "specification document loaded"
            );
            set.insert(kind, text);
        }

        Ok(set)
    }
}
