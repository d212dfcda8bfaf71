//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_script_section() {
        let toml = r#"
            [script]
            name = "Tune.ps1"
            dir = "C:\\Tools"
            shell = "pwsh.exe"
            guid_param = "Guids"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let script = &config.script;

        assert_eq!(script.name.as_deref(), Some("Tune.ps1"));
        assert_eq!(script.dir.as_deref(), Some("C:\\Tools"));
        assert_eq!(script.shell.as_deref(), Some("pwsh.exe"));
        assert_eq!(script.guid_param.as_deref(), Some("Guids"));
    }

    #[test]
    fn parse_filter_section() {
        let toml = r#"
            [filter]
            include = ["^Ethernet", "^Wi-Fi"]
            exclude = ["^vEthernet"]
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.filter.include, vec!["^Ethernet", "^Wi-Fi"]);
        assert_eq!(config.filter.exclude, vec!["^vEthernet"]);
    }

    #[test]
    fn parse_ui_section() {
        let toml = r"
            [ui]
            dialogs = false
            pause = true
        ";

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.ui.dialogs, Some(false));
        assert_eq!(config.ui.pause, Some(true));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.script.name.is_none());
        assert!(config.script.dir.is_none());
        assert!(config.filter.include.is_empty());
        assert!(config.filter.exclude.is_empty());
        assert!(config.ui.dialogs.is_none());
        assert!(config.ui.pause.is_none());
    }
}

mod errors {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn unknown_section_is_rejected() {
        let result = TomlConfig::parse("[webhook]\nurl = \"x\"\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = TomlConfig::parse("[script]\npath = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = TomlConfig::parse("[ui]\ndialogs = \"no\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_syntax_is_rejected() {
        assert!(TomlConfig::parse("[script\nname = 1").is_err());
    }

    #[test]
    fn missing_file_is_file_read_error() {
        let result = TomlConfig::load(std::path::Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        // Everything is commented out, so defaults apply
        assert!(config.script.name.is_none());
        assert!(config.filter.include.is_empty());
    }

    #[test]
    fn template_documents_every_section() {
        let template = default_config_template();

        assert!(template.contains("[script]"));
        assert!(template.contains("[filter]"));
        assert!(template.contains("[ui]"));
        assert!(template.contains("GamingNetworkOptimization.ps1"));
        assert!(template.contains("TargetGuidsCsv"));
    }
}
