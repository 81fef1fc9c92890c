//! Implementation of the `fabgen generate` command.
//!
//! Responsibility: translate CLI arguments and config into wired adapters,
//! call the core pipeline service, and display results. No pipeline logic
//! lives here.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use fabgen_adapters::{
    ComponentCatalog, LocalFilesystem, LocalSpecSource, ProcessToolchain, ToolchainCommands,
};
use fabgen_core::application::{GenerateOptions, GenerateService, RunOutcome};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    progress::ConsoleProgress,
};

/// Execute the `fabgen generate` command.
///
/// Dispatch sequence:
/// 1. Resolve spec and project paths (flags override config)
/// 2. Wire adapters and build the service
/// 3. Early-exit if `--dry-run`
/// 4. Confirm recreation of an existing project tree unless `--yes`
/// 5. Run the pipeline
/// 6. Print the report and map the outcome to the exit status
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let out = Arc::new(output);

    // 1. Paths: CLI flag beats config.
    let spec_dir = args
        .spec_dir
        .unwrap_or_else(|| config.paths.spec_dir.clone());
    let project_root = args
        .project
        .unwrap_or_else(|| config.paths.project_dir.clone());

    debug!(
        spec_dir = %spec_dir.display(),
        project = %project_root.display(),
        "paths resolved"
    );

    // 2. Adapters.
    let commands = ToolchainCommands {
        scaffold: config.toolchain.scaffold_command.clone(),
        install: config.toolchain.install_command.clone(),
        build: config.toolchain.build_command.clone(),
        build_timeout: config.toolchain.build_timeout(),
    };
    let service = GenerateService::new(
        Box::new(LocalSpecSource::new(&spec_dir)),
        Box::new(ComponentCatalog::with_builtin()),
        Box::new(LocalFilesystem::new()),
        Box::new(ProcessToolchain::new(commands)),
        Box::new(ConsoleProgress::new(out.clone())),
    );

    // 3. Dry run: list the artifact set, touch nothing.
    if args.dry_run {
        let artifacts = service.preview().map_err(CliError::Core)?;
        out.header(&format!(
            "Dry run: {} artifacts would be written to {}",
            artifacts.len(),
            project_root.display()
        ))?;
        for artifact in &artifacts {
            out.print(&format!(
                "  {:<44} {:>6} bytes",
                artifact.path.display().to_string(),
                artifact.size()
            ))?;
        }
        return Ok(());
    }

    // 4. The scaffold stage recreates the project tree from scratch.
    if project_root.exists() && !args.yes && !global.quiet {
        out.warning(&format!(
            "'{}' exists and will be removed and recreated",
            project_root.display()
        ))?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Pipeline.
    let options = GenerateOptions {
        skip_install: args.skip_install,
        skip_validate: args.skip_validate,
        packages: config.packages.runtime.clone(),
    };
    info!(project = %project_root.display(), "generation started");
    let report = service
        .generate(&project_root, &options)
        .map_err(CliError::Core)?;

    // 6. Report.
    summarize(&report, &project_root, &out)?;

    match report.outcome() {
        RunOutcome::Validated | RunOutcome::ValidationSkipped => Ok(()),
        RunOutcome::GeneratedUnvalidated => {
            let detail = report
                .validation
                .as_ref()
                .map(|v| {
                    if v.timed_out {
                        format!("build timed out ({})", v.diagnostic_tail)
                    } else {
                        v.diagnostic_tail.clone()
                    }
                })
                .unwrap_or_default();
            Err(CliError::ValidationFailed { detail })
        }
    }
}

fn summarize(
    report: &fabgen_core::application::PipelineReport,
    project_root: &PathBuf,
    out: &OutputManager,
) -> CliResult<()> {
    out.print("")?;
    out.header("Run summary")?;
    out.print(&format!("  Run ID:     {}", report.run_id))?;
    out.print(&format!(
        "  Components: {}",
        report.requirements.components.len()
    ))?;
    out.print(&format!(
        "  Equipment:  {}",
        report.requirements.equipment.len()
    ))?;
    out.print(&format!("  Files:      {}", report.files_written.len()))?;

    match report.outcome() {
        RunOutcome::Validated => {
            out.success(&format!(
                "Application generated at {} and validated",
                project_root.display()
            ))?;
            out.print("")?;
            out.print("To start the application:")?;
            out.print(&format!("  cd {}", project_root.display()))?;
            out.print("  npm run dev")?;
        }
        RunOutcome::ValidationSkipped => {
            out.success(&format!(
                "Application generated at {} (validation skipped)",
                project_root.display()
            ))?;
        }
        RunOutcome::GeneratedUnvalidated => {
            out.error("Application was generated but failed build validation")?;
            out.info("You may need to fix compilation errors manually")?;
        }
    }
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}
