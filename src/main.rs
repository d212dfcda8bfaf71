//! netopt-launch: Network Optimization Launcher
//!
//! Entry point for the netopt-launch application.

use netopt_launch::config::{Cli, Command, ValidatedConfig, write_default_config};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, finish, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    // Setup logging
    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    if cli.is_list() {
        return handle_list(config);
    }

    run_application(config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `list` subcommand.
#[cfg(not(tarpaulin_include))]
fn handle_list(config: ValidatedConfig) -> ExitCode {
    match run::list(config) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!("{e}");
            exit_code::runtime_error()
        }
    }
}

/// Runs the launch flow, then the closing message and pause.
///
/// Excluded from coverage - requires the console and elevation prompt.
#[cfg(not(tarpaulin_include))]
fn run_application(config: ValidatedConfig) -> ExitCode {
    let pause = config.pause;

    let code = match run::execute(config) {
        Ok(outcome) => {
            tracing::debug!(code = outcome.code, "Launch requested");
            exit_code::SUCCESS
        }
        Err(e) => {
            // Already shown to the operator where it was detected
            tracing::debug!("Application error: {e}");
            exit_code::runtime_error()
        }
    };

    finish(pause);
    code
}
