//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all dehint
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `strip`: Scan for Python files and strip return-type annotations
//! - `init`: Initialize a dehint configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct StripCommand {
    /// Directory to scan for Python files (overrides the config file)
    pub root: Option<PathBuf>,

    /// Also process files in subdirectories of the root
    #[arg(short, long)]
    pub recursive: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Strip return-type annotations from Python files in place
    Strip(StripCommand),
    /// Initialize a new .dehintrc.json configuration file
    Init,
}
