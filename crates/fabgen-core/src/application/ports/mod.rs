//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `fabgen-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by the application, implemented by
//!   infrastructure:
//!   - `SpecSource`: load specification documents
//!   - `ProjectFilesystem`: directory creation and file writes
//!   - `Toolchain`: scaffold / install / build subprocesses
//!   - `ArtifactCatalog`: pure source generation
//!   - `ProgressSink`: leveled run progress with elapsed-time markers
//!
//! - **Driving (Input) Ports**: Called by the external world, implemented
//!   by the application services (see the CLI layer).

use std::path::Path;

use crate::domain::{
    ExecReport, GeneratedArtifact, RequirementRecord, SpecificationSet, ValidationResult,
};
use crate::error::FabgenResult;

/// Port for loading specification documents.
///
/// Implemented by:
/// - `fabgen_adapters::spec_source::LocalSpecSource` (production)
/// - `fabgen_adapters::spec_source::MemorySpecSource` (testing)
///
/// A missing individual document is a normal condition and must be
/// reflected as an absent entry in the returned set, not as an error.
pub trait SpecSource: Send + Sync {
    fn load(&self) -> FabgenResult<SpecificationSet>;
}

/// Port for filesystem operations under the generated project root.
///
/// Implemented by:
/// - `fabgen_adapters::filesystem::LocalFilesystem` (production)
/// - `fabgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Writes overwrite unconditionally; the pipeline's contract is
/// last-write-wins with no rollback.
pub trait ProjectFilesystem: Send + Sync {
    /// Create a directory and all parent directories. Pre-existing
    /// directories are not an error.
    fn create_dir_all(&self, path: &Path) -> FabgenResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> FabgenResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the external toolchain the pipeline drives.
///
/// Implemented by:
/// - `fabgen_adapters::toolchain::ProcessToolchain` (production)
/// - `fabgen_adapters::toolchain::ScriptedToolchain` (testing)
pub trait Toolchain: Send + Sync {
    /// Materialize the empty project skeleton at `project_root`.
    ///
    /// # Errors
    ///
    /// Returns `Err` only when the command could not be invoked at all;
    /// a command that ran and exited nonzero is reported through the
    /// `ExecReport`. Either way the caller treats failure as fatal.
    fn scaffold(&self, project_root: &Path) -> FabgenResult<ExecReport>;

    /// Install the runtime dependency list into the project.
    ///
    /// Failure is non-fatal to the pipeline; the caller logs and
    /// continues.
    fn install(&self, project_root: &Path, packages: &[String]) -> FabgenResult<ExecReport>;

    /// Run the build command inside `project_root` with a bounded
    /// timeout. Never fails past its boundary: every failure mode
    /// (nonzero exit, timeout, invocation error) is normalized into the
    /// returned [`ValidationResult`].
    fn build(&self, project_root: &Path) -> ValidationResult;
}

/// Generation hints for a single component.
///
/// Dedicated generators ignore these (their output is fixed); the stub
/// generator for unknown identifiers embeds them into the placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentHints<'a> {
    pub kind: Option<&'a str>,
    pub visualization: Option<&'a str>,
}

/// Port for pure artifact generation.
///
/// Implemented by `fabgen_adapters::catalog::ComponentCatalog`. No I/O
/// occurs behind this port; it only produces text.
pub trait ArtifactCatalog: Send + Sync {
    /// Identifiers with a dedicated generator, in emission order.
    fn known_components(&self) -> Vec<&'static str>;

    /// Generate complete source text for one component. Unrecognized
    /// identifiers yield a minimal stub embedding the identifier name.
    fn generate(&self, component: &str, hints: &ComponentHints<'_>) -> String;

    /// Generate the full artifact set for a run: one artifact per
    /// cataloged component, the root wiring file, and the shared UI
    /// primitives.
    fn artifacts(&self, record: &RequirementRecord) -> Vec<GeneratedArtifact>;
}

/// Severity of a progress event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressLevel {
    Info,
    Success,
    Error,
    Step,
}

/// Port for run progress reporting.
///
/// Implementations carry their own start instant and render a monotonic
/// elapsed-time marker per event; the sink is constructed explicitly and
/// passed into the pipeline so that multiple runs in one process never
/// share timers. Write-only: nothing reported here feeds back into
/// pipeline decisions.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, level: ProgressLevel, message: &str, payload: Option<serde_json::Value>);

    fn info(&self, message: &str) {
        self.emit(ProgressLevel::Info, message, None);
    }

    fn success(&self, message: &str) {
        self.emit(ProgressLevel::Success, message, None);
    }

    fn error(&self, message: &str) {
        self.emit(ProgressLevel::Error, message, None);
    }

    fn step(&self, message: &str) {
        self.emit(ProgressLevel::Step, message, None);
    }
}

/// A sink that discards everything. Useful as a default in tests and for
/// library consumers that only want the returned report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn emit(&self, _level: ProgressLevel, _message: &str, _payload: Option<serde_json::Value>) {}
}
