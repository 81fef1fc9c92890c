//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "generate and validate a dashboard application
//! from a specification directory".

pub mod pipeline;
pub mod writer;

pub use pipeline::{
    GenerateOptions, GenerateService, PipelineReport, RUNTIME_PACKAGES, RunOutcome,
};
pub use writer::ArtifactWriter;
