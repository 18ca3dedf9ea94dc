//! Deterministic, pure logic for the diagnostic report.
//!
//! Core modules are free of I/O side effects. They operate on in-memory
//! readings and return deterministic outputs suitable for tests.

pub mod filter;
pub mod rating;
pub mod tally;
pub mod types;
