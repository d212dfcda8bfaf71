//! Platform-specific [`Elevator`](super::Elevator) implementations.
//!
//! # Platform Support
//!
//! - **Windows**: `ShellExecuteW` with the `runas` verb.
//! - **Other platforms**: every request fails with an
//!   [`ElevationFault`](super::ElevationFault).

#[cfg(windows)]
mod windows;

#[cfg(not(windows))]
mod unsupported;

#[cfg(windows)]
pub use windows::ShellExecuteElevator as PlatformElevator;

#[cfg(not(windows))]
pub use unsupported::UnsupportedElevator as PlatformElevator;
