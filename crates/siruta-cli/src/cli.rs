//! CLI argument definitions for the territory seed generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "territory-seed",
    version,
    about = "Generate the Romanian administrative-territory seed table",
    long_about = "Build the territory reference table (national, macroregions, regions,\n\
                  counties, local administrative units) from an official SIRUTA registry\n\
                  extract, reusing identifiers from a prior export so downstream foreign\n\
                  keys stay stable across regenerations."
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
    /// Generate the territory seed from a registry extract.
    Generate(GenerateArgs),

    /// List the 42 counties with their region and macroregion.
    Counties,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the official SIRUTA registry extract (semicolon-delimited).
    #[arg(value_name = "EXTRACT")]
    pub extract: PathBuf,

    /// Prior seed export to reuse identifiers from. Without it every
    /// identifier is minted fresh (first-run behavior).
    #[arg(long = "prior-export", value_name = "PATH")]
    pub prior_export: Option<PathBuf>,

    /// Output path for the generated seed.
    #[arg(long = "output", value_name = "PATH", default_value = "territories.csv")]
    pub output: PathBuf,

    /// Assemble and validate without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit non-zero when validation finds errors.
    ///
    /// By default validation findings are advisory: they are reported in
    /// full but the seed is still written and the exit code stays 0.
    #[arg(long = "fail-on-issues")]
    pub fail_on_issues: bool,
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
