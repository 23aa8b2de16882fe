//! Shell completion generation for the sf binary.

use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};

/// Arguments for the completions command.
#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Generate shell completions to stdout.
///
/// # Errors
/// Returns an error if writing to stdout fails.
pub fn run_completions(shell: Shell, cmd: &mut Command) -> Result<()> {
    let mut out = std::io::stdout();
    generate(shell, cmd, "sf", &mut out);
    Ok(())
}
