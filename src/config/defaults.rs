//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

pub use crate::launch::{DEFAULT_GUID_PARAM as GUID_PARAM, DEFAULT_SHELL as SHELL};

/// Default companion script file name.
pub const SCRIPT_NAME: &str = crate::launch::DEFAULT_SCRIPT_NAME;

/// Error dialogs are shown unless disabled.
pub const DIALOGS: bool = true;

/// The console waits for Enter before closing unless disabled.
pub const PAUSE: bool = true;
