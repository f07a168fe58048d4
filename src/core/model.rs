//! TODO report model
//!
//! Everything here lives for a single run: the resolved configuration, the
//! per-line match records and the per-file groups handed to the renderer.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The marker substring that makes a line part of the report
pub const MARKER: &str = "TODO";

/// Default line width used when cleaning matched lines
pub const DEFAULT_WIDTH: usize = 79;

/// Default report destination
pub const DEFAULT_OUTPUT: &str = "todo.mkd";

/// Resolved run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Search root, exactly as given on the command line
    pub root: PathBuf,

    /// Descend into subdirectories
    pub recursive: bool,

    /// Report destination
    pub output: PathBuf,

    /// Normalized extensions (`.py`), in the order given
    pub extensions: Vec<String>,

    /// Width limit for cleaned lines
    pub width: usize,
}

/// One line containing the marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub path: PathBuf,

    /// 1-based line number
    pub line_no: usize,

    /// Line as read, without its terminator
    pub raw: String,

    /// Stripped and chopped text shown in the report
    pub clean: String,
}

/// All matches of one file, in line order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTodos {
    pub path: PathBuf,
    pub records: Vec<MatchRecord>,
}

impl FileTodos {
    /// Group records under their file. Returns `None` when there is nothing
    /// to report, so empty files never reach the report.
    pub fn new(path: impl Into<PathBuf>, records: Vec<MatchRecord>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        Some(Self {
            path: path.into(),
            records,
        })
    }

    /// Number of marker lines in this file
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

/// Failures raised while resolving, walking, reading or writing
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Input folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),

    #[error("Cannot open output file {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TodoError {
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        TodoError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}
