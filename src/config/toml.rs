//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Companion script configuration
    #[serde(default)]
    pub script: ScriptSection,

    /// Network adapter filter configuration
    #[serde(default)]
    pub filter: FilterSection,

    /// Console and dialog behaviour
    #[serde(default)]
    pub ui: UiSection,
}

/// Companion script configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptSection {
    /// Script file name
    pub name: Option<String>,

    /// Directory containing the script
    pub dir: Option<String>,

    /// Shell executable
    pub shell: Option<String>,

    /// Script parameter receiving the selected GUIDs
    pub guid_param: Option<String>,
}

/// Adapter filter configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSection {
    /// Regex patterns for adapters to include
    #[serde(default)]
    pub include: Vec<String>,

    /// Regex patterns for adapters to exclude
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Console and dialog configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiSection {
    /// Show modal error dialogs
    pub dialogs: Option<bool>,

    /// Wait for Enter before exiting
    pub pause: Option<bool>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# netopt-launch Configuration File

[script]
# File name of the optimization script (default: GamingNetworkOptimization.ps1)
# name = "GamingNetworkOptimization.ps1"

# Directory containing the script (default: the folder of netopt-launch.exe)
# "~" expands to your home directory
# dir = "~/Tools"

# Shell used to query adapters and run the script (default: powershell.exe)
# shell = "powershell.exe"

# Script parameter receiving the comma-separated GUIDs (default: TargetGuidsCsv)
# guid_param = "TargetGuidsCsv"

[filter]
# Regex patterns (matched against the adapter name) to include (empty = all)
# Note: CLI patterns REPLACE these entirely (not merged)
# include = ["^Ethernet", "^Wi-Fi"]

# Regex patterns to exclude
# Note: CLI patterns REPLACE these entirely (not merged)
# exclude = ["^vEthernet"]

[ui]
# Show error dialog boxes in addition to console messages
# dialogs = true

# Wait for Enter before closing the console window
# pause = true
"#
    .to_string()
}
