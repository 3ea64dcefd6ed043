//! revtex CLI: export code-review workbooks as LaTeX fragments.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use revtex_cli::logging::{LogConfig, LogFormat, init_logging};
use revtex_cli::summary::print_export_summary;
use revtex_ingest::IngestError;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_export, run_stats};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Export(args) => match run_export(&args) {
            Ok(outcome) => {
                print_export_summary(&outcome);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                exit_code_for(&error)
            }
        },
        Command::Stats(args) => match run_stats(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                exit_code_for(&error)
            }
        },
    };
    std::process::exit(exit_code);
}

/// A missing workbook and an unreadable workbook exit with distinct codes;
/// everything else is a generic failure.
fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<IngestError>()
        .map(IngestError::exit_code)
        .unwrap_or(1)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
