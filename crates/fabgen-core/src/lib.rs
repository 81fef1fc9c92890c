//! Fabgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Fabgen
//! dashboard-application generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           fabgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (GenerateService, ArtifactWriter)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (SpecSource, Filesystem, Toolchain,    │
//! │   ArtifactCatalog, ProgressSink)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     fabgen-adapters (Infrastructure)    │
//! │  (LocalSpecSource, ProcessToolchain,    │
//! │   ComponentCatalog, LocalFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (SpecificationSet, RequirementRecord,  │
//! │   PlanStep, GeneratedArtifact)          │
//! │        No I/O, No Subprocesses          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The pipeline itself is strictly sequential: read specifications,
//! extract requirements, log the (advisory) implementation plan, scaffold
//! the target project, install dependencies, generate and write artifacts,
//! and finally validate the tree with the external build toolchain.

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArtifactWriter, GenerateOptions, GenerateService, PipelineReport, RunOutcome,
        ports::{ArtifactCatalog, ProgressSink, ProjectFilesystem, SpecSource, Toolchain},
    };
    pub use crate::domain::{
        ComponentRequirement, ConnectionConfig, ExecReport, FeatureToggle, GeneratedArtifact,
        PlanStep, Priority, RequirementRecord, SpecKind, SpecificationSet, Transport,
        ValidationResult, extract_requirements, implementation_plan,
    };
    pub use crate::error::{FabgenError, FabgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
