//! CLI argument definitions for the revtex exporter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "revtex",
    version,
    about = "Export code-review workbook sheets as LaTeX fragments",
    long_about = "Convert a workbook of Code Review Report sheets into LaTeX fragments.\n\n\
                  Each qualifying sheet becomes a metadata block plus per-reviewer tables;\n\
                  a plain-text check-code mapping becomes a sectioned lookup table, and\n\
                  configured redactions are applied to every generated file."
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
    /// Export report sheets and the codes lookup table as LaTeX fragments.
    Export(ExportArgs),

    /// Summarize check-code and reviewer activity across report sheets.
    Stats(StatsArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the workbook containing Code Review Report sheets.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Output directory for generated fragments.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output_tex")]
    pub output_dir: PathBuf,

    /// Plain-text check-code mapping file.
    #[arg(long = "codes", value_name = "FILE", default_value = "codes_mapping.txt")]
    pub codes: PathBuf,

    /// Two-column CSV of redaction rules (original,replacement).
    ///
    /// A missing file disables redaction.
    #[arg(
        long = "redactions",
        value_name = "FILE",
        default_value = "redactions.csv"
    )]
    pub redactions: PathBuf,

    /// Master template files copied (and redacted) into the output directory.
    #[arg(
        long = "template",
        value_name = "FILE",
        default_values = ["main_report.tex", "main.tex"]
    )]
    pub templates: Vec<PathBuf>,

    /// Parse and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Path to the workbook containing Code Review Report sheets.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Plain-text check-code mapping used to resolve descriptions.
    #[arg(long = "codes", value_name = "FILE", default_value = "codes_mapping.txt")]
    pub codes: PathBuf,

    /// Emit machine-readable JSON instead of tables.
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
