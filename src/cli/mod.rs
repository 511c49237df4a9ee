//! Command-line interface layer.

use anyhow::Result;

mod args;
mod commands;
mod exit_status;

pub use args::{Arguments, Command, StripCommand};
pub use exit_status::ExitStatus;

/// Main entry point for the dehint CLI.
///
/// Dispatches to the appropriate command handler based on the parsed
/// arguments.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Strip(cmd)) => commands::strip::strip(cmd),
        Some(Command::Init) => commands::init::init(),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}
