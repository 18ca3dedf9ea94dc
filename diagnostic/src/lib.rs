//! Binary diagnostic report ratings.
//!
//! A report is a list of equal-width binary strings. This crate derives two
//! pairs of ratings from it:
//!
//! - **Power consumption**: gamma rate (most common bit per position) times
//!   epsilon rate (its inverse).
//! - **Life support**: the most-common-bit rating times the least-common-bit
//!   rating, each found by repeatedly filtering the report on one bit
//!   position at a time until a single reading survives.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (tallies, filtering, decoding).
//! - **[`io`]**: Reading the report and config from disk.
//!
//! [`summary`] coordinates both to implement the CLI commands.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod summary;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{DiagnosticError, ReadingError};
