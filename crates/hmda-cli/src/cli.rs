//! CLI argument definitions for the LAR cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hmda-clean",
    version,
    about = "HMDA LAR cleaner - filter and remap a Loan Application Register extract",
    long_about = "Clean a HMDA Loan Application Register CSV extract.\n\n\
                  Applies the fixed 2024-release cleaning pipeline: column drops,\n\
                  sentinel row filters, code-to-label remapping, boolean derivation,\n\
                  and multi-valued field expansion."
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
    /// Clean a LAR extract and write the result.
    Clean(CleanArgs),

    /// List the pipeline steps in execution order.
    Steps,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the raw LAR CSV extract.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the cleaned CSV output.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Write the run report (per-step row counts, unmapped codes) as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
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
