//! CLI argument definitions for the ARFF tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "arff",
    version,
    about = "Inspect and rewrite ARFF (Attribute-Relation File Format) files"
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

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the relation, attributes, and row count of an ARFF file.
    Inspect(InspectArgs),

    /// Decode a file and re-encode it with normalized formatting.
    Rewrite(RewriteArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the ARFF file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Emit machine-readable JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct RewriteArgs {
    /// Path to the ARFF file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output path for the rewritten file.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
