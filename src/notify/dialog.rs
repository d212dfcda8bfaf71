//! Modal error dialogs using `MessageBoxW`.

use windows::Win32::UI::WindowsAndMessaging::{MB_ICONERROR, MB_OK, MessageBoxW};
use windows::core::HSTRING;

use super::{ConsoleNotifier, Notifier};

/// Prints the alert to the console, then shows a blocking error dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogNotifier {
    console: ConsoleNotifier,
}

impl DialogNotifier {
    /// Creates a new dialog notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            console: ConsoleNotifier,
        }
    }
}

impl Notifier for DialogNotifier {
    fn alert(&self, title: &str, message: &str) {
        self.console.alert(title, message);

        // SAFETY: Both strings are valid, NUL-terminated wide strings owned by
        // the HSTRINGs for the duration of the call. No owner window is passed.
        let _ = unsafe {
            MessageBoxW(
                None,
                &HSTRING::from(message),
                &HSTRING::from(title),
                MB_OK | MB_ICONERROR,
            )
        };
    }
}
