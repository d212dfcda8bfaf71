//! Launch settings, script location and the elevation request.

use std::path::{Path, PathBuf};

use crate::select::SelectionSet;

/// Default companion script file name.
pub const DEFAULT_SCRIPT_NAME: &str = "GamingNetworkOptimization.ps1";

/// Default shell used to run the companion script.
pub const DEFAULT_SHELL: &str = "powershell.exe";

/// Default name of the script parameter carrying the selected GUIDs.
pub const DEFAULT_GUID_PARAM: &str = "TargetGuidsCsv";

/// Where the companion script lives and how it is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    /// Companion script file name.
    pub script_name: String,
    /// Directory to look in. `None` means the executable's directory.
    pub script_dir: Option<PathBuf>,
    /// Shell executable that runs the script.
    pub shell: String,
    /// Named script parameter receiving the comma-separated GUIDs.
    pub guid_param: String,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            script_name: DEFAULT_SCRIPT_NAME.to_string(),
            script_dir: None,
            shell: DEFAULT_SHELL.to_string(),
            guid_param: DEFAULT_GUID_PARAM.to_string(),
        }
    }
}

impl LaunchSettings {
    /// Returns the directory searched for the companion script.
    #[must_use]
    pub fn resolve_script_dir(&self) -> PathBuf {
        self.script_dir.clone().unwrap_or_else(executable_dir)
    }

    /// Returns the full path the companion script is expected at.
    #[must_use]
    pub fn script_path(&self) -> PathBuf {
        self.resolve_script_dir().join(&self.script_name)
    }
}

/// Directory containing the running executable.
///
/// Falls back to the current working directory, then to `.`.
#[must_use]
pub fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// A fully built elevation request, consumed once by an [`Elevator`](super::Elevator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Shell executable to run elevated.
    pub shell: String,
    /// Absolute path of the companion script.
    pub script_path: PathBuf,
    /// Complete parameter string handed to the shell.
    pub parameters: String,
}

impl LaunchRequest {
    /// Builds the request for `script_path` with the given selection.
    ///
    /// The parameter string skips profile loading, bypasses the execution
    /// policy and passes the selection as `-<guid_param> "<csv>"`; the csv is
    /// empty when nothing was selected.
    #[must_use]
    pub fn new(settings: &LaunchSettings, script_path: &Path, selection: &SelectionSet) -> Self {
        let parameters = format!(
            "-NoProfile -ExecutionPolicy Bypass -File \"{}\" -{} \"{}\"",
            script_path.display(),
            settings.guid_param,
            selection.to_csv(),
        );

        Self {
            shell: settings.shell.clone(),
            script_path: script_path.to_path_buf(),
            parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(ids: &[&str]) -> SelectionSet {
        ids.iter().copied().collect()
    }

    mod settings {
        use super::*;

        #[test]
        fn defaults_match_companion_script() {
            let settings = LaunchSettings::default();

            assert_eq!(settings.script_name, "GamingNetworkOptimization.ps1");
            assert_eq!(settings.shell, "powershell.exe");
            assert_eq!(settings.guid_param, "TargetGuidsCsv");
            assert!(settings.script_dir.is_none());
        }

        #[test]
        fn explicit_dir_is_used() {
            let settings = LaunchSettings {
                script_dir: Some(PathBuf::from("/opt/tools")),
                ..LaunchSettings::default()
            };

            assert_eq!(
                settings.script_path(),
                Path::new("/opt/tools").join("GamingNetworkOptimization.ps1")
            );
        }

        #[test]
        fn default_dir_is_executable_dir() {
            let settings = LaunchSettings::default();
            assert_eq!(settings.resolve_script_dir(), executable_dir());
        }

        #[test]
        fn executable_dir_exists() {
            assert!(executable_dir().is_dir());
        }
    }

    mod request {
        use super::*;

        #[test]
        fn parameters_carry_joined_selection() {
            let settings = LaunchSettings::default();
            let path = Path::new("C:/Tools/GamingNetworkOptimization.ps1");

            let request = LaunchRequest::new(&settings, path, &selection(&["GUID-A", "GUID-B"]));

            assert!(request.parameters.contains("\"GUID-A,GUID-B\""));
            assert_eq!(
                request.parameters,
                "-NoProfile -ExecutionPolicy Bypass -File \"C:/Tools/GamingNetworkOptimization.ps1\" -TargetGuidsCsv \"GUID-A,GUID-B\""
            );
        }

        #[test]
        fn empty_selection_passes_empty_string() {
            let settings = LaunchSettings::default();

            let request =
                LaunchRequest::new(&settings, Path::new("script.ps1"), &SelectionSet::new());

            assert!(request.parameters.ends_with("-TargetGuidsCsv \"\""));
        }

        #[test]
        fn custom_shell_and_param_are_used() {
            let settings = LaunchSettings {
                shell: "pwsh.exe".to_string(),
                guid_param: "Guids".to_string(),
                ..LaunchSettings::default()
            };

            let request =
                LaunchRequest::new(&settings, Path::new("s.ps1"), &selection(&["{A}"]));

            assert_eq!(request.shell, "pwsh.exe");
            assert!(request.parameters.ends_with("-Guids \"{A}\""));
            assert_eq!(request.script_path, PathBuf::from("s.ps1"));
        }
    }
}
