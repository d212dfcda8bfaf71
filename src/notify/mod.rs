//! Operator-facing error alerts.
//!
//! Every error condition is reported twice: as console text and as a
//! blocking modal dialog. Components receive a [`Notifier`] instead of
//! calling the OS directly, so the dialog can be swapped for a console-only
//! or recording implementation.
//!
//! - [`ConsoleNotifier`]: prints the message to stdout only
//! - [`DialogNotifier`]: prints the message, then shows a modal error box (Windows)
//! - [`RecordingNotifier`]: collects alerts in memory

use std::cell::RefCell;

#[cfg(windows)]
mod dialog;

#[cfg(windows)]
pub use dialog::DialogNotifier;

/// Dialog titles, one per error category.
pub mod title {
    /// Adapter query failed or returned unusable output.
    pub const ENUMERATION: &str = "Adapter Enumeration Error";
    /// Companion script missing next to the executable.
    pub const SCRIPT_NOT_FOUND: &str = "Script Not Found";
    /// The elevation request was refused.
    pub const LAUNCH: &str = "Launch Error";
    /// The elevation call itself faulted.
    pub const LAUNCH_EXCEPTION: &str = "Launcher Exception";
}

/// Capability for reporting an error to the operator.
///
/// Implementations block until the operator has seen the alert
/// (for dialogs, until the dialog is dismissed).
pub trait Notifier {
    /// Reports `message` under the given `title`.
    fn alert(&self, title: &str, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn alert(&self, title: &str, message: &str) {
        (**self).alert(title, message);
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn alert(&self, title: &str, message: &str) {
        (**self).alert(title, message);
    }
}

/// Prints alerts to stdout without any dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, title: &str, message: &str) {
        tracing::debug!(title, "Reporting error");
        println!("{message}");
    }
}

/// A single recorded alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Dialog title.
    pub title: String,
    /// Message body.
    pub message: String,
}

/// Collects alerts instead of showing them.
///
/// Useful for tests and for embedding the launcher where dialogs are not wanted.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: RefCell<Vec<Alert>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every alert recorded so far, oldest first.
    #[must_use]
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.borrow().clone()
    }

    /// Returns the titles of every alert recorded so far.
    #[must_use]
    pub fn titles(&self) -> Vec<String> {
        self.alerts.borrow().iter().map(|a| a.title.clone()).collect()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.borrow().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, title: &str, message: &str) {
        self.alerts.borrow_mut().push(Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

/// Builds the notifier for this platform.
///
/// With `dialogs` disabled, alerts only go to the console.
#[cfg(windows)]
#[must_use]
pub fn platform_notifier(dialogs: bool) -> Box<dyn Notifier> {
    if dialogs {
        Box::new(DialogNotifier::new())
    } else {
        Box::new(ConsoleNotifier)
    }
}

/// Builds the notifier for this platform.
///
/// Modal dialogs only exist on Windows; elsewhere alerts go to the console.
#[cfg(not(windows))]
#[must_use]
pub fn platform_notifier(dialogs: bool) -> Box<dyn Notifier> {
    if dialogs {
        tracing::debug!("Modal dialogs are unavailable on this platform; using console only");
    }
    Box::new(ConsoleNotifier)
}
