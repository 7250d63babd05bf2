//! CLI argument definitions for the lead importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "leads",
    version,
    about = "Buyer lead bulk import - validate a CSV, then commit its clean rows",
    long_about = "Validate a CSV of buyer leads and commit the rows that pass.\n\n\
                  `preview` reports every problem by spreadsheet row and can save the\n\
                  result as a batch file; `commit` writes a saved batch's clean rows\n\
                  to a JSON record store; `export` writes the store back out as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow lead values (names, phones, emails) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// TOML file with an [import] table of option overrides.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a CSV file and show clean rows and errors. Nothing is stored.
    Preview(PreviewArgs),

    /// Commit the clean rows of a saved batch file.
    Commit(CommitArgs),

    /// Write every stored record as CSV.
    Export(ExportArgs),

    /// List the import columns and their rules.
    Fields,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// CSV file to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Identity that will own the imported leads.
    #[arg(long = "owner", value_name = "ID")]
    pub owner: String,

    /// Save the batch as JSON for a later `commit`.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Maximum number of data rows accepted.
    #[arg(long = "max-rows", value_name = "N")]
    pub max_rows: Option<usize>,

    /// Number of clean rows to display.
    #[arg(long = "preview-limit", value_name = "N")]
    pub preview_limit: Option<usize>,
}

#[derive(Parser)]
pub struct CommitArgs {
    /// Batch file written by `preview --out`.
    #[arg(long = "batch", value_name = "PATH")]
    pub batch: PathBuf,

    /// Identity that will own the imported leads.
    #[arg(long = "owner", value_name = "ID")]
    pub owner: String,

    /// JSON record store to append to (created if missing).
    #[arg(long = "store", value_name = "PATH")]
    pub store: PathBuf,

    /// Refuse to commit when any row in the batch was rejected.
    ///
    /// By default the clean rows are committed and rejected rows are left
    /// out.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// JSON record store to read.
    #[arg(long = "store", value_name = "PATH")]
    pub store: PathBuf,

    /// CSV file to write.
    #[arg(long = "out", value_name = "PATH")]
    pub out: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
