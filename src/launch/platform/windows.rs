//! Elevation through `ShellExecuteW` with the `runas` verb.

use windows::Win32::Foundation::GetLastError;
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;
use windows::core::{HSTRING, PCWSTR, w};

use crate::launch::{ElevationFault, ElevationReply, Elevator, LaunchRequest, MAX_FAILURE_CODE};

/// [`Elevator`] that asks the shell to "run as administrator".
///
/// The shell shows the UAC prompt and starts the process in its own
/// window. The process is not awaited.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecuteElevator {
    _private: (),
}

impl ShellExecuteElevator {
    /// Creates a new elevator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl Elevator for ShellExecuteElevator {
    fn elevate(&self, request: &LaunchRequest) -> Result<ElevationReply, ElevationFault> {
        // Wide strings are NUL-terminated; an interior NUL would silently
        // truncate the command line.
        if request.shell.contains('\0') || request.parameters.contains('\0') {
            return Err(ElevationFault::new(
                "the shell path or parameters contain a NUL character",
            ));
        }

        let shell = HSTRING::from(request.shell.as_str());
        let parameters = HSTRING::from(request.parameters.as_str());

        // SAFETY: All string arguments are valid NUL-terminated wide strings
        // that outlive the call. No owner window or working directory is passed.
        let (instance, last_error) = unsafe {
            let instance = ShellExecuteW(
                None,
                w!("runas"),
                &shell,
                &parameters,
                PCWSTR::null(),
                SW_SHOWNORMAL,
            );
            (instance, GetLastError())
        };

        let reply = ElevationReply::new(instance.0 as isize);
        if reply.code <= MAX_FAILURE_CODE {
            return Ok(reply.with_os_error(last_error.0));
        }
        Ok(reply)
    }
}
