//! Core domain layer for Fabgen.
//!
//! This module contains pure business logic: the specification set, the
//! requirement extraction rules, the fixed implementation plan, and the
//! artifact/validation data model. All I/O — document reads, file writes,
//! subprocess invocation — is handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or subprocess calls
//! - **Immutable data**: Extraction never mutates its input
//! - **Deterministic**: The same specification text always yields the
//!   same requirement record, plan, and artifact set

pub mod artifact;
pub mod error;
pub mod extract;
pub mod plan;
pub mod requirements;
pub mod spec;
pub mod validation;

// Re-exports for convenience
pub use artifact::{COMPONENTS_DIR, GeneratedArtifact, UI_DIR, WIRING_FILE};
pub use error::{DomainError, ErrorCategory};
pub use extract::extract_requirements;
pub use plan::{PLAN_LEN, PlanStep, implementation_plan};
pub use requirements::{
    ComponentRequirement, ConnectionConfig, FeatureToggle, Priority, RequirementRecord, Transport,
};
pub use spec::{SpecKind, SpecificationSet};
pub use validation::{DIAGNOSTIC_TAIL_CHARS, ExecReport, ValidationResult};
