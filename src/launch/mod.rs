//! Elevated launch of the companion configuration script.
//!
//! This module provides:
//! - Launch settings and request building ([`LaunchSettings`], [`LaunchRequest`])
//! - The elevation capability ([`Elevator`]) and its [`platform`] implementation
//! - Return-code interpretation ([`FailureCause`], [`LaunchError`])
//! - The [`Launcher`] tying them together with operator-facing reporting

mod elevator;
mod error;
mod launcher;
pub mod platform;
mod request;


pub use elevator::{ElevationFault, ElevationReply, Elevator};
pub use error::{ERROR_CANCELLED, FailureCause, LaunchError, MAX_FAILURE_CODE};
pub use launcher::{LaunchOutcome, Launcher};
pub use request::{
    DEFAULT_GUID_PARAM, DEFAULT_SCRIPT_NAME, DEFAULT_SHELL, LaunchRequest, LaunchSettings,
    executable_dir,
};
