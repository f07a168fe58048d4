//! Path and extension helpers
//!
//! Extensions are compared as dot-prefixed, case-sensitive suffixes.

use std::path::Path;

/// Normalize an extension argument: `*.py`, `.py` and `py` all become `.py`.
///
/// Returns `None` for tokens with nothing left after the wildcard, e.g. `*`.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let ext = raw.trim_start_matches('*');
    if ext.is_empty() {
        return None;
    }
    if ext.starts_with('.') {
        Some(ext.to_string())
    } else {
        Some(format!(".{ext}"))
    }
}

/// Extension of a file name, dot included.
///
/// Leading dots are part of the stem, so `.bashrc` has no extension while
/// `archive.tar.gz` has `.gz`.
pub fn extension_of(file_name: &str) -> Option<&str> {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    file_name[stem_start..]
        .rfind('.')
        .map(|idx| &file_name[stem_start + idx..])
}

/// Check whether a path's file name carries one of the given extensions
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(extension_of)
        .map(|ext| extensions.iter().any(|e| e == ext))
        .unwrap_or(false)
}
