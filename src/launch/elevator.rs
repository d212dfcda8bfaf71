//! Elevation capability.

use thiserror::Error;

use super::LaunchRequest;

/// Raw result of an elevation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevationReply {
    /// Value returned by the shell-execute call.
    ///
    /// Values above 32 mean the request was accepted.
    pub code: isize,
    /// Last OS error captured right after a failed call, if any.
    pub os_error: Option<u32>,
}

impl ElevationReply {
    /// A reply with no OS error attached.
    #[must_use]
    pub const fn new(code: isize) -> Self {
        Self {
            code,
            os_error: None,
        }
    }

    /// Attaches the last OS error.
    #[must_use]
    pub const fn with_os_error(mut self, os_error: u32) -> Self {
        self.os_error = Some(os_error);
        self
    }
}

/// The elevation call could not be made at all.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ElevationFault {
    /// Description of the fault.
    pub message: String,
}

impl ElevationFault {
    /// Creates a fault with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Capability for running a process with administrator rights.
///
/// Fire-and-forget: implementations return as soon as the OS has accepted
/// or refused the request and never wait for the child.
pub trait Elevator {
    /// Requests elevated execution of `request`.
    ///
    /// # Errors
    ///
    /// Returns [`ElevationFault`] if the request could not be issued.
    /// A refusal by the OS is not an error here; it is reported through
    /// [`ElevationReply::code`].
    fn elevate(&self, request: &LaunchRequest) -> Result<ElevationReply, ElevationFault>;
}

impl<E: Elevator + ?Sized> Elevator for &E {
    fn elevate(&self, request: &LaunchRequest) -> Result<ElevationReply, ElevationFault> {
        (**self).elevate(request)
    }
}
