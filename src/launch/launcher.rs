//! Elevated launch of the companion script.

use std::path::{Path, PathBuf};

use crate::notify::Notifier;
use crate::select::SelectionSet;

use super::{
    Elevator, FailureCause, LaunchError, LaunchRequest, LaunchSettings, MAX_FAILURE_CODE,
};

/// A request the OS accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    /// Script that was handed off.
    pub script_path: PathBuf,
    /// Value returned by the elevation call.
    pub code: isize,
}

/// Locates the companion script and runs it elevated.
///
/// Failures are reported through the [`Notifier`] where they are detected
/// and then returned; nothing is retried.
#[derive(Debug)]
pub struct Launcher<E, N> {
    settings: LaunchSettings,
    elevator: E,
    notifier: N,
}

impl<E: Elevator, N: Notifier> Launcher<E, N> {
    /// Creates a launcher.
    pub const fn new(settings: LaunchSettings, elevator: E, notifier: N) -> Self {
        Self {
            settings,
            elevator,
            notifier,
        }
    }

    /// Returns the launch settings.
    pub const fn settings(&self) -> &LaunchSettings {
        &self.settings
    }

    /// Returns the companion script path if the file exists.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::ScriptNotFound`] (after alerting) if the
    /// script is missing.
    pub fn locate_script(&self) -> Result<PathBuf, LaunchError> {
        let directory = self.settings.resolve_script_dir();
        let script_path = directory.join(&self.settings.script_name);

        if script_path.is_file() {
            tracing::debug!("Companion script found: {}", script_path.display());
            return Ok(script_path);
        }

        Err(self.report(LaunchError::ScriptNotFound {
            script_name: self.settings.script_name.clone(),
            directory,
        }))
    }

    /// Requests elevated execution of the companion script with `selection`.
    ///
    /// The elevation call is not attempted if the script is missing.
    ///
    /// # Errors
    ///
    /// - [`LaunchError::ScriptNotFound`] if the script is missing
    /// - [`LaunchError::Rejected`] if the OS returned a code of 32 or less
    /// - [`LaunchError::Unexpected`] if the call itself failed
    pub fn launch(&self, selection: &SelectionSet) -> Result<LaunchOutcome, LaunchError> {
        let script_path = self.locate_script()?;
        let request = LaunchRequest::new(&self.settings, &script_path, selection);

        self.announce(&script_path, selection);
        tracing::debug!(shell = %request.shell, parameters = %request.parameters, "Requesting elevation");

        let reply = match self.elevator.elevate(&request) {
            Ok(reply) => reply,
            Err(fault) => {
                return Err(self.report(LaunchError::Unexpected {
                    message: fault.to_string(),
                }));
            }
        };

        if reply.code <= MAX_FAILURE_CODE {
            let cause = FailureCause::classify(reply.code, reply.os_error);
            return Err(self.report(LaunchError::Rejected {
                code: reply.code,
                cause,
            }));
        }

        println!(
            "Successfully requested to run '{}' as administrator.\n\
             If UAC is enabled, a prompt should appear.\n\
             The PowerShell script will run in a new window.",
            self.settings.script_name
        );
        tracing::info!(code = reply.code, "Elevation request accepted");

        Ok(LaunchOutcome {
            script_path,
            code: reply.code,
        })
    }

    fn announce(&self, script_path: &Path, selection: &SelectionSet) {
        println!(
            "\nAttempting to run '{}' as administrator...",
            script_path.display()
        );
        if selection.is_empty() {
            println!(
                "No specific interface GUIDs selected; interface-specific tweaks section in \
                 PowerShell script will be skipped."
            );
        } else {
            println!(
                "Interface-specific tweaks will be attempted for GUID(s): {}",
                selection.to_csv()
            );
        }
    }

    fn report(&self, error: LaunchError) -> LaunchError {
        tracing::debug!("Launch failed: {error}");
        self.notifier.alert(error.title(), &error.to_string());
        error
    }
}
