//! Smartcard comparison CLI.

use clap::{ColorChoice, Parser};
use scc_cli::logging::{LogConfig, LogFormat, init_logging};
use scc_cli::session::SessionError;
use scc_cli::settings::load_settings;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_compare, run_config, run_inspect};
use crate::summary::{print_comparison, print_guess, print_overview};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let settings = load_settings(cli.config.as_deref());
    let exit_code = match &cli.command {
        Command::Compare(args) => match run_compare(args, &settings) {
            Ok(outcome) => {
                print_overview("File 1", &outcome.overviews[0]);
                print_overview("File 2", &outcome.overviews[1]);
                println!();
                print_comparison(&outcome);
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Inspect(args) => match run_inspect(args, &settings) {
            Ok(overview) => {
                print_overview("File", &overview);
                print_guess(&overview, args.keyword.as_deref().unwrap_or(&settings.column_keyword));
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Config(args) => match run_config(args, &settings, cli.config.as_deref()) {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
    };
    std::process::exit(exit_code);
}

fn report_error(error: &anyhow::Error) -> i32 {
    if matches!(error.downcast_ref::<SessionError>(), Some(SessionError::NotReady)) {
        eprintln!("warning: {error}");
    } else {
        eprintln!("error: {error:#}");
    }
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
