//! Strip command - scan for Python files and rewrite them in place.
//!
//! Runs the scanner over the resolved root, reports what was found, then
//! feeds the result to the stripper. The first scan or strip failure aborts
//! the run: files already rewritten keep their new content, remaining files
//! are left untouched.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::super::{args::StripCommand, exit_status::ExitStatus};
use crate::{
    config::{Config, load_config},
    report,
    rules::ReturnAnnotation,
    scanner::Scanner,
    stripper::Stripper,
};

pub fn strip(cmd: StripCommand) -> Result<ExitStatus> {
    let config = load_config(Path::new("."))?;
    let root = resolve_root(cmd.root, &config);
    let recursive = cmd.recursive || config.recursive;

    let scanned = Scanner::new().scan(&root, recursive)?;
    report::print_scan_summary(&scanned, &root);

    if scanned.is_empty() {
        report::print_no_files(&root);
        return Ok(ExitStatus::Success);
    }

    let rule = ReturnAnnotation;
    let stats = Stripper::new(&rule).strip_files(&scanned.files)?;
    report::print_run_summary(&stats);

    Ok(ExitStatus::Success)
}

/// An empty root, from the command line or the config file, means the
/// current directory.
fn resolve_root(arg: Option<PathBuf>, config: &Config) -> PathBuf {
    let root = match arg {
        Some(path) => path,
        None => PathBuf::from(&config.root),
    };

    if root.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        root
    }
}
