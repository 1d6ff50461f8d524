//! CLI argument definitions for the smartcard comparison tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "smartcard-compare",
    version,
    about = "Smartcard Comparison Tool - Compare smartcard numbers between two files",
    long_about = "Compare the smartcard numbers of two CSV or Excel files.\n\n\
                  Numbers stored as 123, 123.0 or \"123\" are treated as the same card.\n\
                  Writes the cards found in both files and in only one of them as CSV."
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

    /// Allow smartcard numbers to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file to use instead of the default location.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare the smartcard columns of two files.
    Compare(CompareArgs),

    /// Show the columns of one file and the guessed smartcard column.
    Inspect(InspectArgs),

    /// Show the settings in effect, or write them to the settings file.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct CompareArgs {
    /// First file (CSV or Excel).
    #[arg(value_name = "FILE1")]
    pub file_a: PathBuf,

    /// Second file (CSV or Excel).
    #[arg(value_name = "FILE2")]
    pub file_b: PathBuf,

    /// Smartcard column of the first file (guessed when omitted).
    #[arg(long = "column-a", value_name = "NAME")]
    pub column_a: Option<String>,

    /// Smartcard column of the second file (guessed when omitted).
    #[arg(long = "column-b", value_name = "NAME")]
    pub column_b: Option<String>,

    /// Worksheet of the first file (first sheet when omitted).
    #[arg(long = "sheet-a", value_name = "SHEET")]
    pub sheet_a: Option<String>,

    /// Worksheet of the second file (first sheet when omitted).
    #[arg(long = "sheet-b", value_name = "SHEET")]
    pub sheet_b: Option<String>,

    /// Output directory for the three result CSVs.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Header of the identifier column in the result CSVs.
    #[arg(long = "id-header", value_name = "TEXT")]
    pub id_header: Option<String>,

    /// Keyword used to guess the smartcard columns.
    #[arg(long = "keyword", value_name = "TEXT")]
    pub keyword: Option<String>,

    /// Number of identifiers shown per result table.
    #[arg(long = "preview", value_name = "N")]
    pub preview: Option<usize>,

    /// Compare and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Read every CSV column as text (keeps leading zeros).
    #[arg(long = "no-infer-types")]
    pub no_infer_types: bool,

    /// Also write the counts as JSON to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// File to inspect (CSV or Excel).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Worksheet to inspect (first sheet when omitted).
    #[arg(long = "sheet", value_name = "SHEET")]
    pub sheet: Option<String>,

    /// Keyword used to guess the smartcard column.
    #[arg(long = "keyword", value_name = "TEXT")]
    pub keyword: Option<String>,

    /// Read every CSV column as text.
    #[arg(long = "no-infer-types")]
    pub no_infer_types: bool,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Write the settings in effect to the settings file.
    #[arg(long = "init")]
    pub init: bool,
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
