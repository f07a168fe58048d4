//! Report renderer
//!
//! Renders the collected TODOs as the Markdown report. The layout is a stable
//! artifact: heading text, bold markers, rules and the four-space entry indent
//! must not drift.

use chrono::{DateTime, Local, Timelike};
use std::io::Write;

use crate::core::model::{Config, FileTodos};

/// Timestamp format of the closing line (`2026-10-18 09:14:03.120044`)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Closing line format when the microseconds are zero (`2026-10-18 09:14:03`)
const WHOLE_SECOND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Summary counts shown above the file sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub files: usize,
}

impl Summary {
    pub fn of(todos: &[FileTodos]) -> Self {
        Self {
            total: todos.iter().map(FileTodos::count).sum(),
            files: todos.len(),
        }
    }
}

/// Boolean label used in the header (`True` / `False`)
fn bool_label(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Format the generation time, leaving out a zero fraction
fn timestamp(generated: &DateTime<Local>) -> String {
    let format = if generated.nanosecond() / 1_000 == 0 {
        WHOLE_SECOND_FORMAT
    } else {
        TIMESTAMP_FORMAT
    };
    generated.format(format).to_string()
}

/// Render the whole report to a string
pub fn render_report(config: &Config, todos: &[FileTodos], generated: DateTime<Local>) -> String {
    let summary = Summary::of(todos);
    let mut out = String::new();

    out.push_str("# Markdown TODO list\n\n");
    out.push_str(&format!(
        "Searching folder: **{}**  \n",
        config.root.display()
    ));
    out.push_str(&format!(
        "Recursive search: **{}**  \n",
        bool_label(config.recursive)
    ));
    out.push_str(&format!(
        "Extensions: **{}**  \n",
        config.extensions.join("**, **")
    ));
    out.push_str("  \n");
    out.push_str(&format!(
        "Found **{}** items in **{}** files\n",
        summary.total, summary.files
    ));
    out.push_str("- - -\n");
    out.push('\n');

    for file in todos {
        out.push_str(&format!("#### {}\n", file.path.display()));
        for record in &file.records {
            out.push_str(&format!("    {}: {}\n", record.line_no, record.clean));
        }
        out.push('\n');
    }

    out.push_str("- - -\n");
    out.push_str(&format!("*Generated {}*", timestamp(&generated)));
    out
}

/// Write the report in one pass and flush it
pub fn write_report<W: Write>(
    writer: &mut W,
    config: &Config,
    todos: &[FileTodos],
    generated: DateTime<Local>,
) -> std::io::Result<Summary> {
    writer.write_all(render_report(config, todos, generated).as_bytes())?;
    writer.flush()?;
    Ok(Summary::of(todos))
}
