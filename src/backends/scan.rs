//! File discovery backend
//!
//! Uses walkdir to list files directory by directory: every file of a
//! directory comes before the files of its subdirectories.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::core::model::TodoError;
use crate::core::paths::has_extension;

/// Find files under `root` whose extension is one of `extensions`.
///
/// Without `recursive` only the immediate files of `root` are considered.
/// Entries of each directory are visited in file-name order.
pub fn find_files(
    root: &Path,
    extensions: &[String],
    recursive: bool,
) -> Result<Vec<PathBuf>, TodoError> {
    let mut files = Vec::new();
    if extensions.is_empty() {
        return Ok(files);
    }

    let max_depth = if recursive { usize::MAX } else { 0 };
    let dirs = WalkDir::new(root).max_depth(max_depth).sort_by_file_name();

    for dir in dirs {
        let dir = dir?;
        if !dir.file_type().is_dir() {
            continue;
        }

        let entries = WalkDir::new(dir.path())
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in entries {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            // Symlinked directories are listed but never entered
            if entry.path_is_symlink() && entry.path().is_dir() {
                continue;
            }
            if has_extension(entry.path(), extensions) {
                files.push(entry.into_path());
            }
        }
    }

    debug!("discovered {} candidate files under {}", files.len(), root.display());
    Ok(files)
}
