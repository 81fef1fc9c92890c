//! Application layer for Fabgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, ArtifactWriter)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All extraction and planning rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ArtifactWriter, GenerateOptions, GenerateService, PipelineReport, RUNTIME_PACKAGES, RunOutcome,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    ArtifactCatalog, ComponentHints, NullProgress, ProgressLevel, ProgressSink, ProjectFilesystem,
    SpecSource, Toolchain,
};

pub use error::ApplicationError;
