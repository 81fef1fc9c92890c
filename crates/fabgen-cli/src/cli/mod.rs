//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "fabgen",
    bin_name = "fabgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Specification-driven dashboard app generation",
    long_about = "Fabgen reads product specification documents, extracts a \
                  requirement record, and generates a validated production \
                  monitoring dashboard application.",
    after_help = "EXAMPLES:\n\
        \x20 fabgen generate --spec-dir artifacts --project new-app\n\
        \x20 fabgen extract --spec-dir artifacts --format json\n\
        \x20 fabgen plan --format table\n\
        \x20 fabgen completions bash > /usr/share/bash-completion/completions/fabgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full generation pipeline.
    #[command(
        visible_alias = "g",
        about = "Generate and validate the dashboard application",
        after_help = "EXAMPLES:\n\
            \x20 fabgen generate\n\
            \x20 fabgen generate --spec-dir ./artifacts --project ./new-app\n\
            \x20 fabgen generate --skip-install --skip-validate\n\
            \x20 fabgen generate --dry-run"
    )]
    Generate(GenerateArgs),

    /// Extract and print the requirement record without generating.
    #[command(
        about = "Extract requirements from the specification documents",
        after_help = "EXAMPLES:\n\
            \x20 fabgen extract\n\
            \x20 fabgen extract --spec-dir ./artifacts --format json"
    )]
    Extract(ExtractArgs),

    /// Print the fixed implementation plan.
    #[command(
        about = "Show the implementation plan",
        after_help = "EXAMPLES:\n\
            \x20 fabgen plan\n\
            \x20 fabgen plan --format json"
    )]
    Plan(PlanArgs),

    /// List the cataloged components.
    #[command(
        visible_alias = "ls",
        about = "List cataloged components and their artifacts",
        after_help = "EXAMPLES:\n\
            \x20 fabgen components\n\
            \x20 fabgen components --format list"
    )]
    Components(ComponentsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 fabgen completions bash > ~/.local/share/bash-completion/completions/fabgen\n\
            \x20 fabgen completions zsh  > ~/.zfunc/_fabgen\n\
            \x20 fabgen completions fish > ~/.config/fish/completions/fabgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `fabgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Directory containing the specification documents.
    #[arg(
        short = 's',
        long = "spec-dir",
        value_name = "DIR",
        help = "Specification directory (default from config)"
    )]
    pub spec_dir: Option<PathBuf>,

    /// Target project directory.
    #[arg(
        short = 'p',
        long = "project",
        value_name = "DIR",
        help = "Target project directory (default from config)"
    )]
    pub project: Option<PathBuf>,

    /// Skip the dependency-install stage.
    #[arg(long = "skip-install", help = "Do not install npm dependencies")]
    pub skip_install: bool,

    /// Skip build validation.
    #[arg(long = "skip-validate", help = "Do not run the build validation")]
    pub skip_validate: bool,

    /// Preview the artifact set without writing or running anything.
    #[arg(long = "dry-run", help = "Show what would be generated without generating")]
    pub dry_run: bool,

    /// Skip the confirmation prompt when the project directory exists.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Overwrite an existing project directory without asking"
    )]
    pub yes: bool,
}

// ── extract ───────────────────────────────────────────────────────────────────

/// Arguments for `fabgen extract`.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Directory containing the specification documents.
    #[arg(short = 's', long = "spec-dir", value_name = "DIR")]
    pub spec_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormat,
}

// ── plan / components ─────────────────────────────────────────────────────────

/// Arguments for `fabgen plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormat,
}

/// Arguments for `fabgen components`.
#[derive(Debug, Args)]
pub struct ComponentsArgs {
    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormat,
}

/// Output format for the inspection commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `fabgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "fabgen",
            "generate",
            "--spec-dir",
            "artifacts",
            "--project",
            "new-app",
            "--skip-install",
        ]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.spec_dir.as_deref(), Some(std::path::Path::new("artifacts")));
                assert!(args.skip_install);
                assert!(!args.skip_validate);
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn generate_alias_works() {
        let cli = Cli::parse_from(["fabgen", "g"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn components_alias_works() {
        let cli = Cli::parse_from(["fabgen", "ls"]);
        assert!(matches!(cli.command, Commands::Components(_)));
    }

    #[test]
    fn plan_defaults_to_table_format() {
        let cli = Cli::parse_from(["fabgen", "plan"]);
        if let Commands::Plan(args) = cli.command {
            assert_eq!(args.format, ReportFormat::Table);
        } else {
            panic!("expected Plan command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["fabgen", "--quiet", "--verbose", "plan"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["fabgen"]).is_err());
    }
}
