//! netopt-launch: Network Optimization Launcher
//!
//! A library for listing Windows network adapters, letting an operator pick
//! the ones that should receive interface-specific tweaks, and running a
//! companion PowerShell script as administrator with the chosen GUIDs.

pub mod config;
pub mod launch;
pub mod network;
pub mod notify;
pub mod select;
