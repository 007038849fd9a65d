//! CLI argument definitions for the tidytab toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tidytab",
    version,
    about = "Clean, check, and analyze tabular business/employee records",
    long_about = "Clean CSV extracts of business/employee records.\n\n\
                  `clean` writes a corrected copy plus an issue log,\n\
                  `check` writes a read-only data-quality report, and\n\
                  `analyze` produces grouped statistics and derived columns."
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
    /// Clean a CSV file and write corrected data plus an issue log.
    Clean(CleanArgs),

    /// Write a read-only data-quality report for a CSV file.
    Check(CheckArgs),

    /// Group statistics, derived ratio columns, and negative-value views.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Directory for output files (default: alongside the input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON rule file overriding the built-in employee-dataset rules.
    #[arg(long = "rules", value_name = "JSON")]
    pub rules: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Directory for the report file (default: alongside the input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON rule file overriding the built-in employee-dataset rules.
    #[arg(long = "rules", value_name = "JSON")]
    pub rules: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Column to group by (after header normalization).
    #[arg(long = "group-by", value_name = "COLUMN")]
    pub group_by: String,

    /// Derived ratio column, e.g. `DebtToIncome=Total_Long-term_Debt/Total_Revenue`.
    #[arg(long = "ratio", value_name = "NAME=NUM/DEN")]
    pub ratio: Option<String>,

    /// Also write the rows where this numeric column is negative.
    #[arg(long = "flag-negative", value_name = "COLUMN")]
    pub flag_negative: Option<String>,

    /// Directory for output files (default: alongside the input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON rule file overriding the built-in employee-dataset rules.
    #[arg(long = "rules", value_name = "JSON")]
    pub rules: Option<PathBuf>,
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
