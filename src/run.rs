//! Application execution logic.
//!
//! This module runs the launcher once: check for the companion script,
//! list adapters, let the operator pick, then request the elevated launch.

use std::io::{self, Write};

use thiserror::Error;

use netopt_launch::config::ValidatedConfig;
use netopt_launch::launch::platform::PlatformElevator;
use netopt_launch::launch::{Elevator, LaunchError, LaunchOutcome, Launcher};
use netopt_launch::network::{
    AdapterEnumerator, AdapterRecord, AdapterSource, EnumerationError, PowerShellSource,
};
use netopt_launch::notify::{Notifier, platform_notifier};
use netopt_launch::select::{SelectionSet, select_guids};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
///
/// Every variant has already been reported to the operator where it was
/// detected; this type only carries it to the exit code.
#[derive(Debug, Error)]
pub enum RunError {
    /// The adapter list could not be retrieved.
    #[error("Could not retrieve adapter list: {0}")]
    Enumeration(#[source] EnumerationError),

    /// The companion script could not be launched.
    #[error("Could not launch the optimization script: {0}")]
    Launch(#[source] LaunchError),

    /// Reading the operator's input failed.
    #[error("Console I/O failed: {0}")]
    Console(#[source] io::Error),
}

/// Runs the full launch flow on the process console.
///
/// # Errors
///
/// Returns the first error encountered; the run never continues past one.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires the real
/// console, `PowerShell` and the elevation prompt.
#[cfg(not(tarpaulin_include))]
pub fn execute(config: ValidatedConfig) -> Result<LaunchOutcome, RunError> {
    let notifier = platform_notifier(config.dialogs);
    let source = PowerShellSource::new(config.launch.shell.clone());

    let enumerator = AdapterEnumerator::new(source, &*notifier).with_filter(config.filter);
    let launcher = Launcher::new(config.launch, PlatformElevator::new(), &*notifier);

    run_flow(&enumerator, &launcher, select_guids)
}

/// Lists the adapters that would be offered for selection.
///
/// # Errors
///
/// Returns [`RunError::Enumeration`] if the adapter query fails.
#[cfg(not(tarpaulin_include))]
pub fn list(config: ValidatedConfig) -> Result<(), RunError> {
    let notifier = platform_notifier(config.dialogs);
    let source = PowerShellSource::new(config.launch.shell);
    let enumerator = AdapterEnumerator::new(source, notifier).with_filter(config.filter);

    let adapters = enumerator.fetch_adapters().map_err(RunError::Enumeration)?;
    write_adapter_list(&adapters, io::stdout().lock()).map_err(RunError::Console)
}

/// Script check, enumeration, selection and launch, in that order.
///
/// The script is checked before anything is shown so the operator is not
/// asked to pick adapters for a launch that cannot happen. `select` runs
/// the operator dialogue.
fn run_flow<S, Ne, E, Nl, F>(
    enumerator: &AdapterEnumerator<S, Ne>,
    launcher: &Launcher<E, Nl>,
    select: F,
) -> Result<LaunchOutcome, RunError>
where
    S: AdapterSource,
    Ne: Notifier,
    E: Elevator,
    Nl: Notifier,
    F: FnOnce(&[AdapterRecord]) -> io::Result<SelectionSet>,
{
    launcher.locate_script().map_err(RunError::Launch)?;

    let adapters = match enumerator.fetch_adapters() {
        Ok(adapters) => adapters,
        Err(e) => {
            println!("Could not retrieve adapter list. Aborting launch of optimization script.");
            return Err(RunError::Enumeration(e));
        }
    };
    tracing::info!("Found {} adapter(s) with an interface GUID", adapters.len());

    let selection = select(&adapters).map_err(RunError::Console)?;
    tracing::info!(count = selection.len(), "Adapter selection finished");

    launcher.launch(&selection).map_err(RunError::Launch)
}

fn write_adapter_list<W: Write>(adapters: &[AdapterRecord], mut out: W) -> io::Result<()> {
    if adapters.is_empty() {
        writeln!(out, "No network adapters with GUIDs were found.")?;
        return Ok(());
    }

    for (i, adapter) in adapters.iter().enumerate() {
        writeln!(out, "  {}: {adapter}", i + 1)?;
    }
    Ok(())
}
