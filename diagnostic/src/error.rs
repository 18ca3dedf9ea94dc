//! Typed failures raised while loading and filtering a diagnostic report.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::types::{BitCriteria, MAX_WIDTH};

#[derive(Error, Debug)]
pub enum DiagnosticError {
    /// The report file could not be opened or read.
    #[error("cannot read report {}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record is not a binary string of the report width.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Filtering ran out of bit positions (or candidates) before a single
    /// reading survived.
    #[error(
        "{criteria} filter did not converge: {remaining} candidate(s) left at bit position {position}"
    )]
    FilterExhausted {
        criteria: BitCriteria,
        position: usize,
        remaining: usize,
    },
}

/// Reasons a single line cannot be read as a [`Reading`](crate::core::types::Reading).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadingError {
    #[error("empty record")]
    Empty,

    #[error("invalid character {found:?} at column {column}, expected '0' or '1'")]
    InvalidCharacter { found: char, column: usize },

    #[error("width {width} exceeds the maximum of {max} bits", max = MAX_WIDTH)]
    TooWide { width: usize },
}
