//! CLI argument definitions for the health log.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;
use vitals_cli::logging::LogFormat;
use vitals_model::EntityType;

#[derive(Parser)]
#[command(
    name = "vitals",
    version,
    about = "Personal health log - import, store and export CSV health records",
    long_about = "Import spreadsheet exports of a personal health log.\n\n\
                  Weights and meals, lab tests and procedures, medications, diagnoses,\n\
                  symptom check-ins and doctor visits are normalized, validated and kept\n\
                  in a local JSON store. Stored records export back to canonical CSV."
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

    /// Explicit log level (overrides -v/-q flags and RUST_LOG).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
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

    /// Allow row values (health data) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Store directory (default: $VITALS_STORE_DIR, then ./vitals-data).
    #[arg(long = "store", value_name = "DIR", global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a CSV file into the store.
    Import(ImportArgs),

    /// Export a stored collection as CSV.
    Export(ExportArgs),

    /// List stored records of one entity.
    List(ListArgs),

    /// Show every stored record as a timeline, newest first.
    Timeline,

    /// Show canonical fields and the CSV headers accepted for them.
    Fields(FieldsArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// CSV file to import.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Entity the file holds (weight, lab_test, medication, diagnosis,
    /// symptom, doctor_visit).
    #[arg(long = "entity", short = 'e', value_name = "ENTITY")]
    pub entity: EntityType,

    /// Validate and report without writing to the store.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    #[arg(long = "entity", short = 'e', value_name = "ENTITY")]
    pub entity: EntityType,

    /// Output file or directory (default: ./<entity>.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ListArgs {
    #[arg(long = "entity", short = 'e', value_name = "ENTITY")]
    pub entity: EntityType,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Limit the listing to one entity.
    #[arg(long = "entity", short = 'e', value_name = "ENTITY")]
    pub entity: Option<EntityType>,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
