//! I/O helpers for diagnostic commands.

pub mod config;
pub mod report;
