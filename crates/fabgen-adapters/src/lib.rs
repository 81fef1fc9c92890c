//! Infrastructure adapters for Fabgen.
//!
//! This crate implements the ports defined in
//! `fabgen_core::application::ports`. It contains all external
//! dependencies and I/O operations: document reads, project-tree writes,
//! subprocess invocation, and the embedded component payloads.

pub mod catalog;
pub mod filesystem;
pub mod progress;
pub mod spec_source;
pub mod toolchain;

// Re-export commonly used adapters
pub use catalog::ComponentCatalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use progress::CollectingProgress;
pub use spec_source::{LocalSpecSource, MemorySpecSource};
pub use toolchain::{ProcessToolchain, ScriptedToolchain, ToolchainCommands};
