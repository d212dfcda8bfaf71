//! Error types for the elevated launch.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Win32 `ERROR_CANCELLED`: the operator dismissed the UAC prompt.
pub const ERROR_CANCELLED: u32 = 1223;

/// Return codes at or below this value mean `ShellExecuteW` failed.
pub const MAX_FAILURE_CODE: isize = 32;

/// Why an elevation request was refused, derived from its return code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    /// Code 0: out of memory or resources.
    OutOfResources,
    /// Code 2: the shell or script could not be found.
    FileNotFound,
    /// Code 3: a path component does not exist.
    PathNotFound,
    /// Code 5: access denied.
    AccessDenied,
    /// Code 1223: the operator cancelled the elevation prompt.
    Cancelled,
    /// Any other code.
    Other,
}

impl FailureCause {
    /// Maps a return code to its cause.
    #[must_use]
    pub const fn from_code(code: isize) -> Self {
        match code {
            0 => Self::OutOfResources,
            2 => Self::FileNotFound,
            3 => Self::PathNotFound,
            5 => Self::AccessDenied,
            1223 => Self::Cancelled,
            _ => Self::Other,
        }
    }

    /// Maps a return code, letting the thread's last OS error refine it.
    ///
    /// A cancelled UAC prompt surfaces as "access denied" from
    /// `ShellExecuteW` with `ERROR_CANCELLED` as the last error.
    #[must_use]
    pub const fn classify(code: isize, os_error: Option<u32>) -> Self {
        match os_error {
            Some(ERROR_CANCELLED) => Self::Cancelled,
            _ => Self::from_code(code),
        }
    }

    /// Human-readable explanation shown to the operator.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::OutOfResources => "The operating system is out of memory or resources.",
            Self::FileNotFound => "File not found (shell executable or script path issue).",
            Self::PathNotFound => "Path not found.",
            Self::AccessDenied => {
                "Access denied (UAC prompt possibly denied or other permission issue)."
            }
            Self::Cancelled => {
                "The operation was canceled by the user (UAC prompt denied or closed)."
            }
            Self::Other => "Refer to ShellExecuteW documentation for other error codes.",
        }
    }
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Error type for the elevated launch.
///
/// Each variant is terminal: nothing is retried.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The companion script is not where it is expected.
    #[error(
        "Error: The target PowerShell script '{script_name}' was not found.\n\
         Looked in directory: '{}'\n\n\
         Please ensure '{script_name}' is in the same folder as this launcher.",
        directory.display()
    )]
    ScriptNotFound {
        /// Expected script file name.
        script_name: String,
        /// Directory that was searched.
        directory: PathBuf,
    },

    /// The OS refused the elevation request.
    #[error("ShellExecuteW failed to start the script. Error code: {code}\n\n{cause}")]
    Rejected {
        /// Raw return code.
        code: isize,
        /// Mapped cause.
        cause: FailureCause,
    },

    /// The elevation call itself failed.
    #[error("An exception occurred while trying to use ShellExecuteW: {message}")]
    Unexpected {
        /// Description of the fault.
        message: String,
    },
}

impl LaunchError {
    /// Dialog title for this error category.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        use crate::notify::title;

        match self {
            Self::ScriptNotFound { .. } => title::SCRIPT_NOT_FOUND,
            Self::Rejected { .. } => title::LAUNCH,
            Self::Unexpected { .. } => title::LAUNCH_EXCEPTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod failure_cause {
        use super::*;

        #[test]
        fn known_codes_map_to_causes() {
            assert_eq!(FailureCause::from_code(0), FailureCause::OutOfResources);
            assert_eq!(FailureCause::from_code(2), FailureCause::FileNotFound);
            assert_eq!(FailureCause::from_code(3), FailureCause::PathNotFound);
            assert_eq!(FailureCause::from_code(5), FailureCause::AccessDenied);
            assert_eq!(FailureCause::from_code(1223), FailureCause::Cancelled);
        }

        #[test]
        fn unlisted_low_codes_are_generic() {
            for code in [1, 4, 8, 26, 27, 31, 32] {
                assert_eq!(FailureCause::from_code(code), FailureCause::Other, "code {code}");
            }
        }

        #[test]
        fn last_error_cancelled_overrides_code() {
            assert_eq!(
                FailureCause::classify(5, Some(ERROR_CANCELLED)),
                FailureCause::Cancelled
            );
        }

        #[test]
        fn other_last_errors_keep_code_mapping() {
            assert_eq!(FailureCause::classify(5, Some(5)), FailureCause::AccessDenied);
            assert_eq!(FailureCause::classify(2, None), FailureCause::FileNotFound);
        }

        #[test]
        fn descriptions_name_the_condition() {
            assert!(FailureCause::AccessDenied.to_string().starts_with("Access denied"));
            assert!(FailureCause::Cancelled.to_string().contains("canceled by the user"));
            assert!(FailureCause::FileNotFound.to_string().starts_with("File not found"));
            assert!(FailureCause::Other.to_string().contains("documentation"));
        }
    }

    mod launch_error {
        use super::*;

        #[test]
        fn script_not_found_names_file_and_directory() {
            let error = LaunchError::ScriptNotFound {
                script_name: "GamingNetworkOptimization.ps1".to_string(),
                directory: PathBuf::from("C:/Tools"),
            };

            let text = error.to_string();
            assert!(text.contains("'GamingNetworkOptimization.ps1' was not found"));
            assert!(text.contains("Looked in directory: 'C:/Tools'"));
            assert_eq!(error.title(), "Script Not Found");
        }

        #[test]
        fn rejected_includes_code_and_cause() {
            let error = LaunchError::Rejected {
                code: 5,
                cause: FailureCause::AccessDenied,
            };

            let text = error.to_string();
            assert!(text.contains("Error code: 5"));
            assert!(text.contains("Access denied"));
            assert_eq!(error.title(), "Launch Error");
        }

        #[test]
        fn unexpected_has_its_own_title() {
            let error = LaunchError::Unexpected {
                message: "interior NUL".to_string(),
            };

            assert!(error.to_string().contains("interior NUL"));
            assert_eq!(error.title(), "Launcher Exception");
        }
    }
}
