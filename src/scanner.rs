//! Directory traversal and candidate file selection.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::config::{PYTHON_EXTENSION, SELF_EXCLUDE_FILE};

/// Fatal scan failures.
///
/// Any of these aborts the whole run; the scanner never returns a partial
/// result.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("directory not found: {0:?}")]
    DirectoryNotFound(PathBuf),

    #[error("permission denied while scanning {path:?}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read directory entry under {root:?}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Ordered result of one directory traversal.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
}

impl ScanResult {
    pub fn count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Selects Python files under a root directory.
///
/// The excluded file name defaults to [`SELF_EXCLUDE_FILE`] and is injectable
/// so tests can simulate the tool scanning a tree that contains itself.
#[derive(Debug)]
pub struct Scanner {
    excluded_file: String,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self::with_excluded_file(SELF_EXCLUDE_FILE)
    }

    pub fn with_excluded_file(name: impl Into<String>) -> Self {
        Self {
            excluded_file: name.into(),
        }
    }

    /// Walk `root` and collect every Python file, sorted by file name so the
    /// order is stable across runs against an unchanged tree.
    ///
    /// With `recursive` disabled only the direct children of `root` are
    /// considered.
    pub fn scan(&self, root: &Path, recursive: bool) -> Result<ScanResult, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::DirectoryNotFound(root.to_path_buf()));
        }

        let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
        if !recursive {
            walker = walker.max_depth(1);
        }

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|err| classify_walk_error(root, err))?;
            let path = entry.path();

            if !entry.file_type().is_file() || !is_python_file(path) {
                continue;
            }
            if entry.file_name() == self.excluded_file.as_str() {
                continue;
            }

            files.push(path.to_path_buf());
        }

        Ok(ScanResult { files })
    }
}

fn is_python_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(PYTHON_EXTENSION)
}

fn classify_walk_error(root: &Path, err: walkdir::Error) -> ScanError {
    let permission_denied = err
        .io_error()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::PermissionDenied);
    let path = err.path().unwrap_or(root).to_path_buf();

    if permission_denied {
        ScanError::PermissionDenied {
            path,
            source: err.into(),
        }
    } else {
        ScanError::Walk {
            root: root.to_path_buf(),
            source: err,
        }
    }
}
