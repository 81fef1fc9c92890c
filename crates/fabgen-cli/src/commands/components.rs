//! Implementation of the `fabgen components` command.

use tracing::instrument;

use fabgen_adapters::ComponentCatalog;
use fabgen_core::application::ports::{ArtifactCatalog as _, ComponentHints};
use fabgen_core::domain::COMPONENTS_DIR;

use crate::{
    cli::{ComponentsArgs, ReportFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `fabgen components` command.
#[instrument(skip_all)]
pub fn execute(args: ComponentsArgs, out: OutputManager) -> CliResult<()> {
    let catalog = ComponentCatalog::with_builtin();
    let hints = ComponentHints::default();

    match args.format {
        ReportFormat::Json => {
            let entries: Vec<serde_json::Value> = catalog
                .known_components()
                .into_iter()
                .map(|name| {
                    serde_json::json!({
                        "name": name,
                        "artifact": format!("{COMPONENTS_DIR}/{name}.tsx"),
                        "bytes": catalog.generate(name, &hints).len(),
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries).map_err(|e| {
                CliError::InvalidInput {
                    message: format!("could not serialize components: {e}"),
                }
            })?;
            out.print(&json)?;
        }
        ReportFormat::List => {
            for name in catalog.known_components() {
                out.print(name)?;
            }
        }
        ReportFormat::Table => {
            out.header("Cataloged components")?;
            out.print(&format!("  {:<16} {:<40} {}", "NAME", "ARTIFACT", "BYTES"))?;
            for name in catalog.known_components() {
                let bytes = catalog.generate(name, &hints).len();
                out.print(&format!(
                    "  {:<16} {:<40} {}",
                    name,
                    format!("{COMPONENTS_DIR}/{name}.tsx"),
                    bytes
                ))?;
            }
            out.print("")?;
            out.info("Unrecognized identifiers fall back to a placeholder stub")?;
        }
    }

    Ok(())
}
