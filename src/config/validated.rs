//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::launch::LaunchSettings;
use crate::network::filter::{FilterChain, NameRegexFilter};

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// PowerShell parameter names: a letter or underscore, then word characters.
static PARAM_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("static pattern is valid"));

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Companion script location and invocation
    pub launch: LaunchSettings,

    /// Adapter filter applied before selection
    pub filter: FilterChain,

    /// Show modal error dialogs
    pub dialogs: bool,

    /// Wait for Enter before exiting
    pub pause: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let script_dir = self
            .launch
            .script_dir
            .as_ref()
            .map_or_else(|| "<executable dir>".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Config {{ script: {}, script_dir: {}, shell: {}, guid_param: {}, \
             filters: +{}/-{}, dialogs: {}, pause: {} }}",
            self.launch.script_name,
            script_dir,
            self.launch.shell,
            self.launch.guid_param,
            self.filter.include_count(),
            self.filter.exclude_count(),
            self.dialogs,
            self.pause,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The script name is empty or contains a path
    /// - The shell is empty
    /// - The parameter name is not a valid identifier
    /// - Regex patterns are invalid
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let launch = LaunchSettings {
            script_name: Self::resolve_script_name(cli, toml)?,
            script_dir: Self::resolve_script_dir(cli, toml),
            shell: Self::resolve_shell(cli, toml)?,
            guid_param: Self::resolve_guid_param(cli, toml)?,
        };

        let filter = Self::build_filter(cli, toml)?;

        // Disabling flags win over TOML
        let dialogs = !cli.no_dialog
            && toml
                .and_then(|t| t.ui.dialogs)
                .unwrap_or(defaults::DIALOGS);
        let pause = !cli.no_pause && toml.and_then(|t| t.ui.pause).unwrap_or(defaults::PAUSE);

        Ok(Self {
            launch,
            filter,
            dialogs,
            pause,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(&expand_tilde(path))?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_script_name(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let name = cli
            .script_name
            .as_deref()
            .or_else(|| toml.and_then(|t| t.script.name.as_deref()))
            .unwrap_or(defaults::SCRIPT_NAME)
            .trim();

        if name.is_empty() {
            return Err(ConfigError::InvalidScriptName {
                value: name.to_string(),
                reason: "must not be empty",
            });
        }

        // Only a bare file name; the directory comes from --script-dir
        if name.contains(['/', '\\']) || Path::new(name).file_name().is_none() {
            return Err(ConfigError::InvalidScriptName {
                value: name.to_string(),
                reason: "must be a file name without directories (use --script-dir)",
            });
        }

        Ok(name.to_string())
    }

    fn resolve_script_dir(cli: &Cli, toml: Option<&TomlConfig>) -> Option<PathBuf> {
        // CLI takes precedence
        if let Some(ref dir) = cli.script_dir {
            return Some(expand_tilde(dir));
        }

        // Fall back to TOML
        toml.and_then(|t| t.script.dir.as_deref())
            .map(|dir| expand_tilde(Path::new(dir)))
    }

    fn resolve_shell(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        let shell = cli
            .shell
            .as_deref()
            .or_else(|| toml.and_then(|t| t.script.shell.as_deref()))
            .unwrap_or(defaults::SHELL)
            .trim();

        if shell.is_empty() {
            return Err(ConfigError::InvalidShell {
                reason: "must not be empty",
            });
        }

        Ok(shell.to_string())
    }

    fn resolve_guid_param(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        let param = cli
            .guid_param
            .as_deref()
            .or_else(|| toml.and_then(|t| t.script.guid_param.as_deref()))
            .unwrap_or(defaults::GUID_PARAM);

        // Accept "-Name" as well as "Name"
        let param = param.trim().trim_start_matches('-');

        if !PARAM_NAME.is_match(param) {
            return Err(ConfigError::InvalidParamName {
                value: param.to_string(),
            });
        }

        Ok(param.to_string())
    }

    fn build_filter(cli: &Cli, toml: Option<&TomlConfig>) -> Result<FilterChain, ConfigError> {
        // CLI patterns replace TOML patterns, independently for include and exclude
        let includes = if cli.include_adapters.is_empty() {
            toml.map_or(&[][..], |t| t.filter.include.as_slice())
        } else {
            cli.include_adapters.as_slice()
        };

        let excludes = if cli.exclude_adapters.is_empty() {
            toml.map_or(&[][..], |t| t.filter.exclude.as_slice())
        } else {
            cli.exclude_adapters.as_slice()
        };

        let mut chain = FilterChain::new();
        for pattern in includes {
            chain = chain.include(compile(pattern)?);
        }
        for pattern in excludes {
            chain = chain.exclude(compile(pattern)?);
        }

        Ok(chain)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn compile(pattern: &str) -> Result<NameRegexFilter, ConfigError> {
    NameRegexFilter::new(pattern).map_err(|e| ConfigError::InvalidRegex {
        pattern: pattern.to_string(),
        source: e,
    })
}

/// Expands a leading `~` to the home directory.
///
/// Paths without `~`, or when the home directory is unknown, are returned unchanged.
fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}
