//! Artifact writer - materializes generated artifacts into the project tree.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::application::ports::ProjectFilesystem;
use crate::domain::{COMPONENTS_DIR, GeneratedArtifact, UI_DIR, artifact::validate_artifacts};
use crate::error::FabgenResult;

/// Writes generated artifacts to deterministic paths under a project root.
///
/// Semantics:
/// - Directory creation precedes all writes and is idempotent.
/// - Each artifact is written exactly once, overwriting unconditionally
///   (last-write-wins). Re-running a write pass produces identical final
///   contents.
/// - The first write failure aborts the remaining writes; artifacts
///   already written are left in place. There is no rollback.
pub struct ArtifactWriter<'a> {
    filesystem: &'a dyn ProjectFilesystem,
}

impl<'a> ArtifactWriter<'a> {
    pub fn new(filesystem: &'a dyn ProjectFilesystem) -> Self {
        Self { filesystem }
    }

    /// Write the artifact batch under `project_root`, returning the paths
    /// written, in order.
    #[instrument(skip_all, fields(root = %project_root.display(), artifacts = artifacts.len()))]
    pub fn write_all(
        &self,
        project_root: &Path,
        artifacts: &[GeneratedArtifact],
    ) -> FabgenResult<Vec<PathBuf>> {
        validate_artifacts(artifacts)?;

        // Required subdirectory structure first, then per-file parents.
        self.filesystem
            .create_dir_all(&project_root.join(COMPONENTS_DIR))?;
        self.filesystem.create_dir_all(&project_root.join(UI_DIR))?;

        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let target = project_root.join(&artifact.path);
            if let Some(parent) = target.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&target, &artifact.source)?;
            debug!(path = %target.display(), bytes = artifact.size(), "artifact written");
            written.push(target);
        }

        Ok(written)
    }
}
