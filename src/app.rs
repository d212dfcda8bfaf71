//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, error hints and the
//! closing pause that support the main entry point.

use std::io::{self, BufRead, IsTerminal, Write};

use netopt_launch::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, unreadable config file, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - adapter query failed, script missing, launch refused.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'netopt-launch init' to generate a configuration template.");
        }
        ConfigError::InvalidScriptName { .. } => {
            eprintln!("\nUse --script-dir to point at the directory containing the script.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Prints the closing message and, on an interactive console, waits for Enter.
///
/// Keeps the console window open when the launcher was started by
/// double-clicking it.
pub fn finish(pause: bool) {
    println!(
        "\nnetopt-launch has finished its task of attempting to launch the PowerShell script."
    );

    if pause && io::stdin().is_terminal() && io::stdout().is_terminal() {
        wait_for_enter(io::stdin().lock(), io::stdout().lock());
    }
}

fn wait_for_enter<R: BufRead, W: Write>(mut input: R, mut output: W) {
    let _ = write!(output, "Press Enter to close this window...");
    let _ = output.flush();

    let mut line = String::new();
    if let Err(e) = input.read_line(&mut line) {
        tracing::debug!("Pause interrupted: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_for_enter_prompts_and_consumes_line() {
        let mut output = Vec::new();

        wait_for_enter("\n".as_bytes(), &mut output);

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Press Enter to close this window..."
        );
    }

    #[test]
    fn wait_for_enter_returns_on_eof() {
        let mut output = Vec::new();
        wait_for_enter("".as_bytes(), &mut output);
        assert!(!output.is_empty());
    }
}
