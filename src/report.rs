//! Status output formatting.
//!
//! Printing lives here, separate from the scanner and stripper logic. The
//! summary printers come in pairs with writer-injected `_to` variants for
//! testing.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::scanner::ScanResult;
use crate::stripper::StripStats;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the scan report: how many files were found and which ones.
pub fn print_scan_summary(result: &ScanResult, root: &Path) {
    print_scan_summary_to(result, root, &mut io::stdout().lock());
}

pub fn print_scan_summary_to<W: Write>(result: &ScanResult, root: &Path, writer: &mut W) {
    let count = result.count();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Found {} Python {} under {}",
            count,
            if count == 1 { "file" } else { "files" },
            root.display()
        )
        .green()
    );
    for file in &result.files {
        let _ = writeln!(writer, "  {}", file.display());
    }
}

/// Print a notice when the scan matched nothing.
pub fn print_no_files(root: &Path) {
    print_no_files_to(root, &mut io::stdout().lock());
}

pub fn print_no_files_to<W: Write>(root: &Path, writer: &mut W) {
    let _ = writeln!(writer, "No Python files to process under {}", root.display());
}

/// Per-file confirmation after a rewrite.
pub fn print_stripped(path: &Path) {
    println!("{} {}", "Stripped".green().bold(), path.display());
}

/// Per-file confirmation when the rule matched nothing.
pub fn print_unchanged(path: &Path) {
    println!("{} {}", "Unchanged".dimmed(), path.display());
}

/// Notice for a path refused by the reserved-name check.
pub fn print_skipped(path: &Path) {
    println!(
        "{} skipping reserved file {}",
        "warning:".bold().yellow(),
        path.display()
    );
}

/// Print the end-of-run summary.
pub fn print_run_summary(stats: &StripStats) {
    print_run_summary_to(stats, &mut io::stdout().lock());
}

pub fn print_run_summary_to<W: Write>(stats: &StripStats, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Processed {} file(s), rewrote {}",
            stats.processed, stats.modified
        )
        .green()
    );
    if stats.skipped > 0 {
        let _ = writeln!(writer, "  - skipped: {} reserved file(s)", stats.skipped);
    }
}
