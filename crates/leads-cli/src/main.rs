//! Buyer lead import CLI.

use clap::{ColorChoice, Parser};
use leads_cli::config::CliConfig;
use leads_cli::logging::{LogConfig, LogFormat, init_logging};
use leads_import::ImportError;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_commit, run_export, run_fields, run_preview};
use crate::summary::print_report;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let exit_code = match &cli.command {
        Command::Preview(args) => match run_preview(args, &config) {
            Ok(batch) => {
                if batch.has_rejections() { 1 } else { 0 }
            }
            Err(error) => report_error(&error),
        },
        Command::Commit(args) => match run_commit(args, &config) {
            Ok(_) => 0,
            Err(error) => report_error(&error),
        },
        Command::Export(args) => match run_export(args) {
            Ok(_) => 0,
            Err(error) => report_error(&error),
        },
        Command::Fields => match run_fields() {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
    };
    std::process::exit(exit_code);
}

/// Prints a failed run and returns its exit code.
///
/// Import failures are also shown in the row-addressed report layout.
fn report_error(error: &anyhow::Error) -> i32 {
    if let Some(import_error) = error.downcast_ref::<ImportError>() {
        print_report(&import_error.report());
    }
    eprintln!("error: {error:#}");
    1
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
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
