//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Load specification documents
//! 2. Extract the requirement record
//! 3. Build (and log) the advisory implementation plan
//! 4. Scaffold the target project (fatal on failure)
//! 5. Install runtime dependencies (non-fatal on failure)
//! 6. Generate and write the artifact set (fatal on failure)
//! 7. Validate the generated tree with the build toolchain
//!
//! Stages run strictly sequentially with no overlap. Failures are caught
//! at each stage boundary, logged with context, and translated into typed
//! errors or the final report — nothing panics past the orchestrator.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    ArtifactCatalog, ProgressSink, ProjectFilesystem, SpecSource, Toolchain,
};
use crate::application::services::writer::ArtifactWriter;
use crate::domain::{
    ExecReport, GeneratedArtifact, PlanStep, RequirementRecord, ValidationResult,
    extract_requirements, implementation_plan,
};
use crate::error::FabgenResult;

/// Runtime packages installed into every generated application.
pub const RUNTIME_PACKAGES: [&str; 7] = [
    "mqtt",
    "recharts",
    "@tanstack/react-query",
    "lucide-react",
    "date-fns",
    "clsx",
    "tailwind-merge",
];

/// Per-run options for [`GenerateService::generate`].
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Skip the dependency-install stage entirely.
    pub skip_install: bool,
    /// Skip build validation; the run reports `ValidationSkipped`.
    pub skip_validate: bool,
    /// Packages handed to the installer.
    pub packages: Vec<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            skip_install: false,
            skip_validate: false,
            packages: RUNTIME_PACKAGES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// How a completed run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Generation and build validation both succeeded.
    Validated,
    /// The tree was generated but the build validation failed; the
    /// generated files are left in place for inspection.
    GeneratedUnvalidated,
    /// Validation was skipped by request.
    ValidationSkipped,
}

/// Everything a completed run produced, for reporting.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub run_id: Uuid,
    pub requirements: RequirementRecord,
    pub plan: Vec<PlanStep>,
    pub files_written: Vec<PathBuf>,
    /// Install outcome; `None` when the stage was skipped.
    pub install: Option<ExecReport>,
    /// Validation verdict; `None` when the stage was skipped.
    pub validation: Option<ValidationResult>,
}

impl PipelineReport {
    pub fn outcome(&self) -> RunOutcome {
        match &self.validation {
            Some(v) if v.success => RunOutcome::Validated,
            Some(_) => RunOutcome::GeneratedUnvalidated,
            None => RunOutcome::ValidationSkipped,
        }
    }
}

/// Main generation service.
///
/// Owns the driven ports and runs the pipeline end to end.
pub struct GenerateService {
    specs: Box<dyn SpecSource>,
    catalog: Box<dyn ArtifactCatalog>,
    filesystem: Box<dyn ProjectFilesystem>,
    toolchain: Box<dyn Toolchain>,
    progress: Box<dyn ProgressSink>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        specs: Box<dyn SpecSource>,
        catalog: Box<dyn ArtifactCatalog>,
        filesystem: Box<dyn ProjectFilesystem>,
        toolchain: Box<dyn Toolchain>,
        progress: Box<dyn ProgressSink>,
    ) -> Self {
        Self {
            specs,
            catalog,
            filesystem,
            toolchain,
            progress,
        }
    }

    /// Run extraction only and return the record (used by `fabgen extract`).
    pub fn extract(&self) -> FabgenResult<RequirementRecord> {
        let specs = self.specs.load()?;
        Ok(extract_requirements(&specs))
    }

    /// Generate the artifact set without touching the filesystem or any
    /// subprocess (used by `fabgen generate --dry-run`).
    pub fn preview(&self) -> FabgenResult<Vec<GeneratedArtifact>> {
        let record = self.extract()?;
        Ok(self.catalog.artifacts(&record))
    }

    /// Run the full pipeline against `project_root`.
    ///
    /// Returns `Err` for fatal stage failures (spec source, scaffold,
    /// generation/write). A failed install or a failed validation is not
    /// an `Err`: it is recorded in the report, whose
    /// [`PipelineReport::outcome`] distinguishes the cases.
    #[instrument(skip_all, fields(root = %project_root.as_ref().display()))]
    pub fn generate(
        &self,
        project_root: impl AsRef<Path>,
        options: &GenerateOptions,
    ) -> FabgenResult<PipelineReport> {
        let project_root = project_root.as_ref();
        let run_id = Uuid::new_v4();
        info!(%run_id, "pipeline started");

        // 1-2. Specifications and extraction. Missing individual documents
        // are absorbed by the source; only a broken source is fatal.
        self.progress.step("Reading specification documents");
        let specs = self.specs.load().inspect_err(|e| {
            self.progress.error(&format!("Specification read failed: {e}"));
        })?;
        self.progress.step("Analyzing requirements from specifications");
        let requirements = extract_requirements(&specs);
        self.progress.emit(
            crate::application::ports::ProgressLevel::Success,
            "Requirements analysis complete",
            serde_json::to_value(&requirements).ok(),
        );

        // 3. Advisory plan; logged, not consumed downstream.
        self.progress.step("Generating implementation plan");
        let plan = implementation_plan(&requirements);
        self.progress.emit(
            crate::application::ports::ProgressLevel::Success,
            "Implementation plan generated",
            Some(serde_json::json!({ "steps": plan.len() })),
        );

        // 4. Scaffold. Fatal before any artifact is written.
        self.progress.step("Scaffolding target project");
        let scaffold = self.toolchain.scaffold(project_root).inspect_err(|e| {
            self.progress.error(&format!("Scaffold invocation failed: {e}"));
        })?;
        if !scaffold.success() {
            self.progress.error("Scaffold command exited nonzero");
            return Err(ApplicationError::ScaffoldFailed {
                reason: format!(
                    "exit code {:?}: {}",
                    scaffold.exit_code, scaffold.stderr_tail
                ),
            }
            .into());
        }
        self.progress.success("Project skeleton created");

        // 5. Dependency install. Logged but never fatal.
        let install = if options.skip_install {
            None
        } else {
            Some(self.install_dependencies(project_root, &options.packages))
        };

        // 6. Generate + write. Fatal; partial writes are left in place.
        self.progress.step("Creating application structure");
        let artifacts = self.catalog.artifacts(&requirements);
        let writer = ArtifactWriter::new(self.filesystem.as_ref());
        let files_written = writer
            .write_all(project_root, &artifacts)
            .inspect_err(|e| {
                self.progress.error(&format!("Artifact write failed: {e}"));
            })?;
        self.progress.success(&format!(
            "Application structure created ({} files)",
            files_written.len()
        ));

        // 7. Build validation. Normalized into the report, never an Err.
        let validation = if options.skip_validate {
            None
        } else {
            self.progress.step("Validating generated application");
            let result = self.toolchain.build(project_root);
            if result.success {
                self.progress.success("Application built successfully");
            } else if result.timed_out {
                self.progress.error("Build validation timed out");
            } else {
                self.progress
                    .error(&format!("Build failed: {}", result.diagnostic_tail));
            }
            Some(result)
        };

        let report = PipelineReport {
            run_id,
            requirements,
            plan,
            files_written,
            install,
            validation,
        };
        info!(%run_id, outcome = ?report.outcome(), "pipeline finished");
        Ok(report)
    }

    /// Install stage: invocation errors and nonzero exits both collapse to
    /// a logged, non-fatal report entry.
    fn install_dependencies(&self, project_root: &Path, packages: &[String]) -> ExecReport {
        self.progress.step("Installing dependencies");
        match self.toolchain.install(project_root, packages) {
            Ok(report) if report.success() => {
                self.progress.emit(
                    crate::application::ports::ProgressLevel::Success,
                    "Dependencies installed",
                    Some(serde_json::json!({ "packages": packages })),
                );
                report
            }
            Ok(report) => {
                warn!(exit = ?report.exit_code, "dependency install failed, continuing");
                self.progress
                    .error("Failed to install dependencies, continuing anyway");
                report
            }
            Err(e) => {
                warn!(error = %e, "dependency install could not be invoked, continuing");
                self.progress
                    .error("Failed to invoke dependency install, continuing anyway");
                ExecReport {
                    exit_code: None,
                    stdout_tail: String::new(),
                    stderr_tail: e.to_string(),
                }
            }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
