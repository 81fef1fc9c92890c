//! Application layer errors.
//!
//! These errors represent failures in pipeline orchestration, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during pipeline orchestration.
///
/// Note what is *not* here: a dependency-install failure and a build
/// validation failure are reported outcomes, not errors — the pipeline
/// continues (install) or terminates with a distinguishable report
/// (validation). Only the fatal stages produce these variants.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Reading the specification directory failed (beyond individual
    /// missing files, which are non-errors).
    #[error("Specification source error: {reason}")]
    SpecSource { reason: String },

    /// The external scaffold command failed; the run aborts before any
    /// artifact is written.
    #[error("Project scaffolding failed: {reason}")]
    ScaffoldFailed { reason: String },

    /// A toolchain command could not be invoked at all (shell or binary
    /// missing, bad working directory).
    #[error("Toolchain command '{command}' could not be invoked: {reason}")]
    ToolchainUnavailable { command: String, reason: String },

    /// Filesystem operation failed while writing artifacts.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Artifact generation produced an invalid batch.
    #[error("Artifact generation failed: {reason}")]
    GenerationFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SpecSource { reason } => vec![
                format!("Could not read specifications: {}", reason),
                "Check the --spec-dir path and its permissions".into(),
            ],
            Self::ScaffoldFailed { reason } => vec![
                format!("Scaffold command failed: {}", reason),
                "Ensure the scaffold command exists and is executable".into(),
                "Run with -vv to see the captured command output".into(),
            ],
            Self::ToolchainUnavailable { command, .. } => vec![
                format!("Could not invoke: {}", command),
                "Ensure the command is installed and on your PATH".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files already written were left in place".into(),
            ],
            Self::GenerationFailed { reason } => {
                vec![format!("Generation failed: {}", reason)]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SpecSource { .. } => ErrorCategory::NotFound,
            Self::ScaffoldFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::ToolchainUnavailable { .. } => ErrorCategory::Configuration,
            Self::GenerationFailed { .. } => ErrorCategory::Internal,
        }
    }
}
