//! Report flow - Build the TODO report end to end
//!
//! Steps:
//! 1. Discover candidate files under the root
//! 2. Scan each file for marker lines, keeping files with at least one match
//! 3. Write the Markdown report to the already opened destination

use anyhow::{Context, Result};
use chrono::Local;
use std::fs::File;
use std::io::BufWriter;
use tracing::info;

use crate::backends::markers::collect_file;
use crate::backends::scan::find_files;
use crate::core::model::{Config, FileTodos, TodoError};
use crate::core::render::{write_report, Summary};

/// Discover and scan files, in discovery order
pub fn collect_todos(config: &Config) -> Result<Vec<FileTodos>, TodoError> {
    let files = find_files(&config.root, &config.extensions, config.recursive)?;

    #[cfg(feature = "parallel")]
    let scanned: Vec<Option<FileTodos>> = {
        use rayon::prelude::*;
        files
            .par_iter()
            .map(|path| collect_file(path, config.width))
            .collect::<Result<_, _>>()?
    };

    #[cfg(not(feature = "parallel"))]
    let scanned: Vec<Option<FileTodos>> = files
        .iter()
        .map(|path| collect_file(path, config.width))
        .collect::<Result<_, _>>()?;

    Ok(scanned.into_iter().flatten().collect())
}

/// Run the report flow, writing into `output`
pub fn run_report(config: &Config, output: File) -> Result<Summary> {
    let todos = collect_todos(config)?;

    let mut writer = BufWriter::new(output);
    let summary = write_report(&mut writer, config, &todos, Local::now())
        .with_context(|| format!("Failed to write report: {}", config.output.display()))?;

    info!(
        "wrote {} items in {} files to {}",
        summary.total,
        summary.files,
        config.output.display()
    );
    Ok(summary)
}
