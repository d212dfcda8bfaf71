//! Fallback for platforms without UAC elevation.

use crate::launch::{ElevationFault, ElevationReply, Elevator, LaunchRequest};

/// [`Elevator`] that refuses every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedElevator {
    _private: (),
}

impl UnsupportedElevator {
    /// Creates a new elevator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl Elevator for UnsupportedElevator {
    fn elevate(&self, request: &LaunchRequest) -> Result<ElevationReply, ElevationFault> {
        tracing::warn!(shell = %request.shell, "Elevation requested on an unsupported platform");
        Err(ElevationFault::new("elevation is only supported on Windows"))
    }
}
