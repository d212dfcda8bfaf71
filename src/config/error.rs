//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Script name is empty or contains a path.
    #[error("Invalid script name '{value}': {reason}")]
    InvalidScriptName {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },

    /// Script parameter name is not a valid PowerShell identifier.
    #[error("Invalid script parameter name '{value}': expected letters, digits and underscores")]
    InvalidParamName {
        /// The invalid value
        value: String,
    },

    /// Shell is empty.
    #[error("Invalid shell: {reason}")]
    InvalidShell {
        /// Reason for invalidity
        reason: &'static str,
    },

    /// Invalid regex pattern for adapter filtering.
    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        /// The invalid pattern
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },
}
