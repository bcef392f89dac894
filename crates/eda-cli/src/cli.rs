//! CLI argument definitions for the EDA tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "eda",
    version,
    about = "Instant EDA - Automated first-pass analysis of CSV files",
    long_about = "Profile a CSV file in one pass.\n\n\
                  Classifies columns, computes summary statistics, selects charts,\n\
                  detects customer/product/amount columns and suggests next steps."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a CSV file and write the report.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the CSV file.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Root output directory; results go to <DIR>/<file stem>/.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "eda-output")]
    pub output_dir: PathBuf,

    /// TOML file overriding analysis options (bins, pie range, top-N sizes, date formats).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Select charts but do not write chart files.
    #[arg(long = "no-render")]
    pub no_render: bool,

    /// Skip writing report.json.
    #[arg(long = "no-json")]
    pub no_json: bool,

    /// Print the report as JSON to stdout instead of summary tables.
    #[arg(long = "json")]
    pub json: bool,
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
