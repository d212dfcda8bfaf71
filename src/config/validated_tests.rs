//! Tests for validated configuration.

use std::io::Write;
use std::path::PathBuf;

use tempfile::{NamedTempFile, tempdir};

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, write_default_config};
use crate::network::AdapterRecord;
use crate::network::filter::AdapterFilter;

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["netopt-launch"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod defaults {
    use super::*;

    #[test]
    fn no_input_uses_builtin_defaults() {
        let config = ValidatedConfig::from_raw(&cli(&[]), None).unwrap();

        assert_eq!(config.launch.script_name, "GamingNetworkOptimization.ps1");
        assert!(config.launch.script_dir.is_none());
        assert_eq!(config.launch.shell, "powershell.exe");
        assert_eq!(config.launch.guid_param, "TargetGuidsCsv");
        assert!(config.filter.is_empty());
        assert!(config.dialogs);
        assert!(config.pause);
        assert!(!config.verbose);
    }

    #[test]
    fn display_summarizes_config() {
        let config = ValidatedConfig::from_raw(&cli(&["--exclude-adapter", "^v"]), None).unwrap();
        let text = config.to_string();

        assert!(text.contains("script: GamingNetworkOptimization.ps1"));
        assert!(text.contains("script_dir: <executable dir>"));
        assert!(text.contains("filters: +0/-1"));
    }
}

mod precedence {
    use super::*;

    const TOML: &str = r#"
        [script]
        name = "FromToml.ps1"
        dir = "/toml/dir"
        shell = "pwsh.exe"
        guid_param = "TomlParam"
    "#;

    #[test]
    fn toml_overrides_defaults() {
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml(TOML))).unwrap();

        assert_eq!(config.launch.script_name, "FromToml.ps1");
        assert_eq!(config.launch.script_dir, Some(PathBuf::from("/toml/dir")));
        assert_eq!(config.launch.shell, "pwsh.exe");
        assert_eq!(config.launch.guid_param, "TomlParam");
    }

    #[test]
    fn cli_overrides_toml() {
        let cli = cli(&[
            "--script-name",
            "FromCli.ps1",
            "--script-dir",
            "/cli/dir",
            "--shell",
            "powershell.exe",
            "--guid-param",
            "CliParam",
        ]);

        let config = ValidatedConfig::from_raw(&cli, Some(&toml(TOML))).unwrap();

        assert_eq!(config.launch.script_name, "FromCli.ps1");
        assert_eq!(config.launch.script_dir, Some(PathBuf::from("/cli/dir")));
        assert_eq!(config.launch.shell, "powershell.exe");
        assert_eq!(config.launch.guid_param, "CliParam");
    }

    #[test]
    fn no_flags_disable_toml_settings() {
        let toml = toml("[ui]\ndialogs = true\npause = true\n");

        let config =
            ValidatedConfig::from_raw(&cli(&["--no-dialog", "--no-pause"]), Some(&toml)).unwrap();

        assert!(!config.dialogs);
        assert!(!config.pause);
    }

    #[test]
    fn toml_can_disable_ui() {
        let toml = toml("[ui]\ndialogs = false\npause = false\n");

        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert!(!config.dialogs);
        assert!(!config.pause);
    }

    #[test]
    fn verbose_comes_from_cli() {
        let config = ValidatedConfig::from_raw(&cli(&["-v"]), None).unwrap();
        assert!(config.verbose);
    }
}

mod validation {
    use super::*;

    #[test]
    fn empty_script_name_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--script-name", "  "]), None);
        assert!(matches!(result, Err(ConfigError::InvalidScriptName { .. })));
    }

    #[test]
    fn script_name_with_directory_is_rejected() {
        for name in ["tools/Tune.ps1", "tools\\Tune.ps1", ".."] {
            let result = ValidatedConfig::from_raw(&cli(&["--script-name", name]), None);
            assert!(
                matches!(result, Err(ConfigError::InvalidScriptName { .. })),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn empty_shell_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--shell", ""]), None);
        assert!(matches!(result, Err(ConfigError::InvalidShell { .. })));
    }

    #[test]
    fn param_name_leading_dash_is_stripped() {
        let config = ValidatedConfig::from_raw(&cli(&["--guid-param=-Guids"]), None).unwrap();
        assert_eq!(config.launch.guid_param, "Guids");
    }

    #[test]
    fn invalid_param_name_is_rejected() {
        let toml = toml("[script]\nguid_param = \"Target Guids\"\n");

        let result = ValidatedConfig::from_raw(&cli(&[]), Some(&toml));

        match result {
            Err(ConfigError::InvalidParamName { value }) => assert_eq!(value, "Target Guids"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn invalid_regex_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--include-adapter", "(oops"]), None);

        match result {
            Err(ConfigError::InvalidRegex { pattern, .. }) => assert_eq!(pattern, "(oops"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

mod filters {
    use super::*;

    fn wsl() -> AdapterRecord {
        AdapterRecord::new("vEthernet (WSL)", "Hyper-V", "{V}")
    }

    fn ethernet() -> AdapterRecord {
        AdapterRecord::new("Ethernet", "Intel", "{E}")
    }

    #[test]
    fn toml_patterns_are_used_without_cli() {
        let toml = toml("[filter]\nexclude = [\"^vEthernet\"]\n");

        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert!(!config.filter.matches(&wsl()));
        assert!(config.filter.matches(&ethernet()));
    }

    #[test]
    fn cli_patterns_replace_toml_patterns() {
        let toml = toml("[filter]\nexclude = [\"^vEthernet\"]\n");

        let config =
            ValidatedConfig::from_raw(&cli(&["--exclude-adapter", "^Ethernet$"]), Some(&toml))
                .unwrap();

        assert_eq!(config.filter.exclude_count(), 1);
        assert!(config.filter.matches(&wsl()));
        assert!(!config.filter.matches(&ethernet()));
    }

    #[test]
    fn include_and_exclude_are_replaced_independently() {
        let toml = toml("[filter]\ninclude = [\"Ethernet\"]\nexclude = [\"^vEthernet\"]\n");

        let config =
            ValidatedConfig::from_raw(&cli(&["--include-adapter", "^Wi-Fi$"]), Some(&toml))
                .unwrap();

        assert_eq!(config.filter.include_count(), 1);
        assert_eq!(config.filter.exclude_count(), 1);
        assert!(!config.filter.matches(&ethernet()));
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_from_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[script]\nname = \"FromFile.ps1\"\n[ui]\npause = false").unwrap();

        let path = file.path().to_str().unwrap();
        let config = ValidatedConfig::load(&cli(&["--config", path])).unwrap();

        assert_eq!(config.launch.script_name, "FromFile.ps1");
        assert!(!config.pause);
    }

    #[test]
    fn load_without_config_file() {
        let config = ValidatedConfig::load(&cli(&[])).unwrap();
        assert_eq!(config.launch.script_name, "GamingNetworkOptimization.ps1");
    }

    #[test]
    fn missing_config_file_is_error() {
        let result = ValidatedConfig::load(&cli(&["--config", "/definitely/not/here.toml"]));
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn invalid_config_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[script]\nunknown = 1").unwrap();

        let path = file.path().to_str().unwrap();
        let result = ValidatedConfig::load(&cli(&["--config", path]));

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod init {
    use super::*;

    #[test]
    fn write_default_config_creates_loadable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("netopt-launch.toml");

        write_default_config(&path).unwrap();

        let config = TomlConfig::load(&path).unwrap();
        assert!(config.script.name.is_none());
    }

    #[test]
    fn write_to_missing_directory_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("config.toml");

        let result = write_default_config(&path);

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}
