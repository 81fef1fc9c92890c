//! Implementation of the `fabgen completions` command.

use clap::CommandFactory;
use clap_complete::{Shell as ClapShell, generate};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

/// Execute the `fabgen completions` command, writing the script to stdout.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let shell = match args.shell {
        Shell::Bash => ClapShell::Bash,
        Shell::Zsh => ClapShell::Zsh,
        Shell::Fish => ClapShell::Fish,
        Shell::PowerShell => ClapShell::PowerShell,
        Shell::Elvish => ClapShell::Elvish,
    };

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());

    Ok(())
}
