//! CLI argument definitions for the datatype mapping client.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dtmap_model::RemappingOption;

#[derive(Parser)]
#[command(
    name = "dtmap",
    version,
    about = "Datatype mapping client - generate and export mapping tables",
    long_about = "Generate datatype mapping tables between two database systems.\n\n\
                  Requests the combined table from a mapping backend, shows scraping\n\
                  progress while it is built, and exports the result to CSV."
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

    /// Base URL of the mapping backend (overrides the settings file).
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Settings file to read instead of the per-user default.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the mapping table for a source and target system.
    Generate(GenerateArgs),

    /// List the source and target systems known to the backend.
    Systems,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Source database system.
    #[arg(long = "source", value_name = "SYSTEM")]
    pub source: Option<String>,

    /// Target database system.
    #[arg(long = "target", value_name = "SYSTEM")]
    pub target: Option<String>,

    /// How source types are matched against the remapping rules.
    #[arg(long = "remapping-option", value_enum)]
    pub remapping_option: Option<RemappingOptionArg>,

    /// Use advanced (type-parameter aware) mapping.
    #[arg(long = "advanced")]
    pub advanced: bool,

    /// Re-scrape the vendor documentation before building the table.
    #[arg(long = "refresh")]
    pub refresh: bool,

    /// Export the generated table to CSV.
    #[arg(long = "export")]
    pub export: bool,

    /// Directory for the CSV export (overrides the settings file).
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Also write the table and reference links as an HTML fragment.
    #[arg(long = "html", value_name = "PATH")]
    pub html: Option<PathBuf>,
}

/// CLI remapping option choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RemappingOptionArg {
    Substring,
    Exact,
    None,
}

impl From<RemappingOptionArg> for RemappingOption {
    fn from(arg: RemappingOptionArg) -> Self {
        match arg {
            RemappingOptionArg::Substring => RemappingOption::Substring,
            RemappingOptionArg::Exact => RemappingOption::Exact,
            RemappingOptionArg::None => RemappingOption::Disabled,
        }
    }
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
