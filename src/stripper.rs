//! Per-file read/transform/write pipeline.

use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::config::SELF_EXCLUDE_FILE;
use crate::report;
use crate::rules::TransformRule;

/// Fatal per-file failure covering open, read, and write errors.
///
/// The run stops at the first one: files already rewritten keep their new
/// content, remaining files are left untouched.
#[derive(Debug, Error)]
#[error("failed to process {path:?}: {source}")]
pub struct StripError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Counters for the end-of-run summary.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripStats {
    /// Files read and run through the rule.
    pub processed: usize,
    /// Files whose content actually changed on disk.
    pub modified: usize,
    /// Files skipped by the reserved-name check.
    pub skipped: usize,
}

/// Applies a [`TransformRule`] to each file of a scan, in order.
///
/// Carries its own reserved-name check, independent of the scanner's, so a
/// caller handing over paths directly still cannot rewrite the tool itself.
pub struct Stripper<'a> {
    rule: &'a dyn TransformRule,
    excluded_file: String,
}

impl<'a> Stripper<'a> {
    pub fn new(rule: &'a dyn TransformRule) -> Self {
        Self::with_excluded_file(rule, SELF_EXCLUDE_FILE)
    }

    pub fn with_excluded_file(rule: &'a dyn TransformRule, name: impl Into<String>) -> Self {
        Self {
            rule,
            excluded_file: name.into(),
        }
    }

    /// Rewrite every file in `files`, stopping at the first failure.
    ///
    /// Prints one status line per file.
    pub fn strip_files(&self, files: &[PathBuf]) -> Result<StripStats, StripError> {
        let mut stats = StripStats::default();

        for path in files {
            let reserved = path
                .file_name()
                .is_some_and(|name| name == self.excluded_file.as_str());
            if reserved {
                report::print_skipped(path);
                stats.skipped += 1;
                continue;
            }

            let modified = self.strip_file(path)?;
            stats.processed += 1;
            if modified {
                stats.modified += 1;
                report::print_stripped(path);
            } else {
                report::print_unchanged(path);
            }
        }

        Ok(stats)
    }

    /// Read, transform, and rewrite one file. Returns whether the content
    /// changed.
    ///
    /// The rewrite goes through a temporary file in the same directory
    /// followed by a rename, so a failure mid-write leaves the original
    /// intact. A file the rule leaves unchanged is not rewritten at all.
    fn strip_file(&self, path: &Path) -> Result<bool, StripError> {
        let source = fs::read_to_string(path).map_err(|err| StripError {
            path: path.to_path_buf(),
            source: err,
        })?;

        let stripped = match self.rule.apply(&source) {
            Cow::Borrowed(_) => return Ok(false),
            Cow::Owned(new_content) => new_content,
        };

        write_atomic(path, &stripped).map_err(|err| StripError {
            path: path.to_path_buf(),
            source: err,
        })?;

        Ok(true)
    }
}

fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
