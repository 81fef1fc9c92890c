//! Implementation of the `fabgen plan` command.

use tracing::instrument;

use fabgen_core::domain::{RequirementRecord, implementation_plan};

use crate::{
    cli::{PlanArgs, ReportFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `fabgen plan` command.
///
/// The plan is fixed, so no documents are read: printing it from the
/// default record is exact.
#[instrument(skip_all)]
pub fn execute(args: PlanArgs, out: OutputManager) -> CliResult<()> {
    let plan = implementation_plan(&RequirementRecord::default());

    match args.format {
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&plan).map_err(|e| CliError::InvalidInput {
                message: format!("could not serialize plan: {e}"),
            })?;
            out.print(&json)?;
        }
        ReportFormat::List => {
            for step in &plan {
                out.print(&format!("{:>2}. {}", step.sequence, step.task))?;
            }
        }
        ReportFormat::Table => {
            out.header("Implementation plan")?;
            out.print(&format!(
                "  {:<4} {:<10} {:<38} {}",
                "SEQ", "PRIORITY", "TASK", "ARTIFACTS"
            ))?;
            for step in &plan {
                out.print(&format!(
                    "  {:<4} {:<10} {:<38} {}",
                    step.sequence,
                    step.priority.to_string(),
                    step.task,
                    step.artifacts.join(", ")
                ))?;
            }
        }
    }

    Ok(())
}
