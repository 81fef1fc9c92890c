//! Implementation of the `fabgen extract` command.
//!
//! Runs document loading and requirement extraction only, then prints the
//! record — useful for checking what the pipeline would see before
//! committing to a full generation run.

use tracing::instrument;

use fabgen_adapters::LocalSpecSource;
use fabgen_core::application::ports::SpecSource as _;
use fabgen_core::domain::{RequirementRecord, extract_requirements};

use crate::{
    cli::{ExtractArgs, ReportFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `fabgen extract` command.
#[instrument(skip_all)]
pub fn execute(args: ExtractArgs, config: AppConfig, out: OutputManager) -> CliResult<()> {
    let spec_dir = args
        .spec_dir
        .unwrap_or_else(|| config.paths.spec_dir.clone());

    let specs = LocalSpecSource::new(&spec_dir)
        .load()
        .map_err(CliError::Core)?;
    let record = extract_requirements(&specs);

    match args.format {
        ReportFormat::Json => print_json(&record, &out),
        ReportFormat::List | ReportFormat::Table => print_table(&record, &spec_dir, &out),
    }
}

fn print_json(record: &RequirementRecord, out: &OutputManager) -> CliResult<()> {
    let json = serde_json::to_string_pretty(record).map_err(|e| CliError::InvalidInput {
        message: format!("could not serialize record: {e}"),
    })?;
    out.print(&json)?;
    Ok(())
}

fn print_table(
    record: &RequirementRecord,
    spec_dir: &std::path::Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header(&format!("Requirements from {}", spec_dir.display()))?;

    if record.is_default() {
        out.info("No documents found; extraction returned defaults")?;
        return Ok(());
    }

    if !record.components.is_empty() {
        out.print("")?;
        out.print("Components:")?;
        out.print(&format!("  {:<24} {:<10} {}", "NAME", "KIND", "PRIORITY"))?;
        for component in &record.components {
            out.print(&format!(
                "  {:<24} {:<10} {}",
                component.name, component.kind, component.priority
            ))?;
        }
    }

    if !record.equipment.is_empty() {
        out.print("")?;
        let ids: Vec<&str> = record.equipment.iter().map(String::as_str).collect();
        out.print(&format!("Equipment ({}): {}", ids.len(), ids.join(", ")))?;
    }

    if !record.features.is_empty() {
        out.print("")?;
        out.print("Features:")?;
        for feature in &record.features {
            out.print(&format!(
                "  {:<20} [{}]",
                feature.name,
                feature.params.join(", ")
            ))?;
        }
    }

    if let Some(conn) = &record.connection {
        out.print("")?;
        out.print(&format!(
            "Connection: {}://{}:{} (topics {}/#)",
            conn.transport, conn.host, conn.port, conn.topic_prefix
        ))?;
    }

    Ok(())
}
