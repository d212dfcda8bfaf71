//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// netopt-launch: Network Optimization Launcher
///
/// Lists network adapters, lets you pick the ones that should receive
/// interface-specific tweaks, and runs the optimization script as
/// administrator.
#[derive(Debug, Parser)]
#[command(name = "netopt-launch")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File name of the optimization script
    #[arg(long = "script-name", value_name = "FILE")]
    pub script_name: Option<String>,

    /// Directory containing the optimization script (default: next to this executable)
    #[arg(long = "script-dir", value_name = "DIR")]
    pub script_dir: Option<PathBuf>,

    /// Shell used to query adapters and run the script
    #[arg(long, global = true)]
    pub shell: Option<String>,

    /// Name of the script parameter receiving the selected GUIDs
    #[arg(long = "guid-param", value_name = "NAME")]
    pub guid_param: Option<String>,

    /// Regex pattern for adapters to include (can be specified multiple times)
    #[arg(long = "include-adapter", value_name = "PATTERN", global = true)]
    pub include_adapters: Vec<String>,

    /// Regex pattern for adapters to exclude (can be specified multiple times)
    #[arg(long = "exclude-adapter", value_name = "PATTERN", global = true)]
    pub exclude_adapters: Vec<String>,

    /// Report errors on the console only, without dialog boxes
    #[arg(long = "no-dialog", global = true)]
    pub no_dialog: bool,

    /// Exit without waiting for Enter at the end
    #[arg(long = "no-pause", global = true)]
    pub no_pause: bool,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for netopt-launch
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "netopt-launch.toml")]
        output: PathBuf,
    },

    /// List the adapters that would be offered for selection, then exit
    List,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }

    /// Returns true if this is the list command.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self.command, Some(Command::List))
    }
}
