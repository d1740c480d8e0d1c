//! starmate CLI.

use clap::{ColorChoice, Parser};
use starmate_cli::logging::{LogConfig, LogFormat, init_logging};
use starmate_cli::settings::Settings;
use starmate_client::ClientError;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use tracing::{debug, error};

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, ProfileCommand};
use crate::commands::{
    Outcome, run_batch, run_login, run_logout, run_profile_interests, run_profile_show,
    run_profile_update, run_register, run_validate, run_zodiac,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let outcome = dispatch(cli.command, &settings);
    std::process::exit(exit_code(outcome));
}

fn dispatch(command: Command, settings: &Settings) -> Outcome {
    match command {
        Command::Zodiac(args) => run_zodiac(&args),
        Command::Validate(args) => run_validate(args, settings),
        Command::Batch(args) => run_batch(&args, settings),
        Command::Register(args) => run_register(args, settings),
        Command::Login(args) => run_login(args, settings),
        Command::Logout => run_logout(settings),
        Command::Profile { command } => match command {
            ProfileCommand::Show(args) => run_profile_show(&args, settings),
            ProfileCommand::Update(args) => run_profile_update(args, settings),
            ProfileCommand::Interests(args) => run_profile_interests(args, settings),
        },
    }
}

fn exit_code(outcome: Outcome) -> i32 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            match err.downcast_ref::<ClientError>() {
                Some(client_error) => {
                    debug!(error = %client_error, "request failed");
                    eprintln!("error: {}", client_error.user_message());
                }
                None => {
                    error!(error = %format!("{err:#}"), "command failed");
                    eprintln!("error: {err:#}");
                }
            }
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
///
/// `RUST_LOG` is honored only when no level flag was given.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig::default()
        .with_level(cli.verbosity.tracing_level_filter())
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data);
    if let Some(level) = cli.log_level {
        config = config.with_level(match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        });
    }
    config = config.with_format(match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    });
    config.with_ansi(match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    })
}
