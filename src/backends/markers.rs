//! Marker scanning backend
//!
//! Reads one file at a time and keeps every line that contains the marker
//! as a plain substring (`TODONE` counts).

use std::fs;
use std::path::Path;
use tracing::{debug, trace, warn};

use crate::core::model::{FileTodos, MatchRecord, TodoError, MARKER};
use crate::core::util::clean_line;

/// Split text into lines on `\n`, `\r\n` or a lone `\r`, terminators removed.
///
/// A trailing terminator does not start an extra empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(idx) => {
                let line = &rest[..idx];
                let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Scan a single file for marker lines.
///
/// A path that is no longer a regular file is skipped with a warning and
/// yields no records. Read failures are returned as errors.
pub fn scan_file(path: &Path, width: usize) -> Result<Vec<MatchRecord>, TodoError> {
    if !path.is_file() {
        warn!("could not find file: {}", path.display());
        return Ok(Vec::new());
    }

    let text = fs::read_to_string(path).map_err(|e| TodoError::read(path, e))?;

    let mut records = Vec::new();
    for (idx, raw) in split_lines(&text).enumerate() {
        if !raw.contains(MARKER) {
            continue;
        }
        let record = MatchRecord {
            path: path.to_path_buf(),
            line_no: idx + 1,
            raw: raw.to_string(),
            clean: clean_line(raw, width),
        };
        trace!("{}:{}: {}", record.path.display(), record.line_no, record.raw);
        records.push(record);
    }

    debug!("{}: {} marker lines", path.display(), records.len());
    Ok(records)
}

/// Scan a file and group its records, `None` when nothing matched
pub fn collect_file(path: &Path, width: usize) -> Result<Option<FileTodos>, TodoError> {
    Ok(FileTodos::new(path, scan_file(path, width)?))
}
