//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use tracing::debug;

use crate::core::model::{Config, TodoError, DEFAULT_OUTPUT, DEFAULT_WIDTH};
use crate::core::paths::normalize_extension;

/// marktodo - collect TODO lines from a source tree into a Markdown list.
#[derive(Parser, Debug)]
#[command(name = "marktodo")]
#[command(
    author,
    version,
    about,
    long_about = r#"marktodo walks a folder, picks every line containing TODO from files with
the selected extensions, and writes one Markdown report listing each
occurrence by file and line number.

Matching is a plain substring search: TODONE matches too.

Examples:
    marktodo -f src -e .rs
    marktodo -f . -e *.py *.pyx -o TODO.md
    marktodo -f scripts -r -e sh
"#
)]
pub struct Cli {
    /// Folder to search.
    #[arg(
        short = 'f',
        long = "folder",
        value_name = "PATH",
        long_help = "Folder to search. Must exist and be a directory.\n\n\
The path is shown in the report exactly as given, and file headings are\n\
built by joining it with each file's location."
    )]
    pub folder: PathBuf,

    /// Disable recursive folder search.
    #[arg(
        short = 'r',
        long = "no-recurse",
        long_help = "Only search the files directly inside the folder.\n\n\
By default every subdirectory is searched as well."
    )]
    pub no_recurse: bool,

    /// Output file (default is todo.mkd).
    #[arg(
        short = 'o',
        long = "output",
        default_value = DEFAULT_OUTPUT,
        value_name = "OUT-FILE",
        long_help = "Report destination. The file is created (or truncated) before\n\
scanning starts, so it is written even when nothing is found."
    )]
    pub output: PathBuf,

    /// File extensions to search.
    #[arg(
        short = 'e',
        long = "ext",
        value_name = "EXT",
        num_args = 0..,
        long_help = "File extensions to search, e.g. `-e .py .rs`.\n\n\
A leading `*` is ignored so `*.py` and `.py` are equivalent, and a missing\n\
dot is added (`py` means `.py`). Matching is case-sensitive.\n\n\
With no extensions nothing is searched, but the report is still written."
    )]
    pub ext: Vec<String>,

    /// Maximum width of a reported line.
    #[arg(
        short = 'w',
        long = "width",
        default_value_t = DEFAULT_WIDTH,
        value_name = "N",
        long_help = "Maximum width of a reported line. Longer lines are cut near the\n\
last space (or at the width) and end with `...`."
    )]
    pub width: usize,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Print debug diagnostics (discovered files, per-file counts) to stderr."
    )]
    pub verbose: bool,

    /// Quiet mode (errors only).
    #[arg(
        short,
        long,
        conflicts_with = "verbose",
        long_help = "Only print errors to stderr. Warnings about skipped files are hidden."
    )]
    pub quiet: bool,
}

impl Cli {
    /// Resolve parsed flags into a run configuration.
    ///
    /// Fails when the folder is missing or not a directory.
    pub fn resolve(&self) -> Result<Config, TodoError> {
        if !self.folder.is_dir() {
            return Err(TodoError::FolderNotFound(self.folder.clone()));
        }

        Ok(Config {
            root: self.folder.clone(),
            recursive: !self.no_recurse,
            output: self.output.clone(),
            extensions: self
                .ext
                .iter()
                .filter_map(|e| normalize_extension(e))
                .collect(),
            width: self.width,
        })
    }
}

/// Create or truncate the report destination
pub fn open_output(config: &Config) -> Result<File, TodoError> {
    File::create(&config.output).map_err(|source| TodoError::Output {
        path: config.output.clone(),
        source,
    })
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve()?;
    let output = open_output(&config)?;
    debug!("resolved configuration: {:?}", config);

    crate::flows::report::run_report(&config, output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("marktodo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["-f", "src"]);
        assert_eq!(cli.folder, PathBuf::from("src"));
        assert!(!cli.no_recurse);
        assert_eq!(cli.output, PathBuf::from("todo.mkd"));
        assert!(cli.ext.is_empty());
        assert_eq!(cli.width, 79);
    }

    #[test]
    fn test_folder_is_required() {
        assert!(Cli::try_parse_from(["marktodo", "-e", ".py"]).is_err());
    }

    #[test]
    fn test_multiple_extensions() {
        let cli = parse(&["-f", "src", "-e", ".py", "*.rs", "md", "-r"]);
        assert_eq!(cli.ext, vec![".py", "*.rs", "md"]);
        assert!(cli.no_recurse);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["marktodo", "-f", ".", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_resolve_normalizes_extensions() {
        let temp = tempdir().unwrap();
        let folder = temp.path().to_str().unwrap();
        let config = parse(&["-f", folder, "-e", "*.py", ".rs", "*", "-r"])
            .resolve()
            .unwrap();

        assert_eq!(config.extensions, vec![".py", ".rs"]);
        assert!(!config.recursive);
        assert_eq!(config.root, temp.path());
    }

    #[test]
    fn test_resolve_missing_folder() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope");
        let err = parse(&["-f", missing.to_str().unwrap()])
            .resolve()
            .unwrap_err();
        assert!(matches!(err, TodoError::FolderNotFound(_)));
    }

    #[test]
    fn test_resolve_file_is_not_a_folder() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.py");
        std::fs::write(&file, "x").unwrap();

        let err = parse(&["-f", file.to_str().unwrap()]).resolve().unwrap_err();
        assert!(err.to_string().starts_with("Input folder not found: "));
    }

    #[test]
    fn test_open_output_truncates() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("todo.mkd");
        std::fs::write(&out, "stale content").unwrap();

        let config = parse(&["-f", temp.path().to_str().unwrap(), "-o", out.to_str().unwrap()])
            .resolve()
            .unwrap();
        drop(open_output(&config).unwrap());
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "");
    }

    #[test]
    fn test_open_output_in_missing_directory() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("no/such/dir/todo.mkd");
        let config = parse(&["-f", temp.path().to_str().unwrap(), "-o", out.to_str().unwrap()])
            .resolve()
            .unwrap();
        assert!(matches!(
            open_output(&config).unwrap_err(),
            TodoError::Output { .. }
        ));
    }
}
