//! Command handlers. Each submodule maps one subcommand onto the core
//! services; no extraction or generation logic lives here.

pub mod completions;
pub mod components;
pub mod extract;
pub mod generate;
pub mod plan;
