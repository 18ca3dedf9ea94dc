//! Stable exit codes for diagnostic CLI commands.

use crate::error::DiagnosticError;

/// Command succeeded and its ratings were printed.
pub const OK: i32 = 0;
/// Command failed for any reason not listed below (invalid config, rendering).
pub const INVALID: i32 = 1;
/// Reserved for usage errors reported by clap.
pub const USAGE: i32 = 2;
/// The report file could not be opened or read.
pub const INPUT_UNAVAILABLE: i32 = 3;
/// The report contains a malformed record.
pub const MALFORMED_RECORD: i32 = 4;
/// Filtering did not converge to a single reading.
pub const FILTER_EXHAUSTED: i32 = 5;

/// Exit code for a failed command, chosen by the first [`DiagnosticError`]
/// in the error chain.
pub fn for_error(err: &anyhow::Error) -> i32 {
    let cause = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<DiagnosticError>());
    match cause {
        Some(DiagnosticError::InputUnavailable { .. }) => INPUT_UNAVAILABLE,
        Some(DiagnosticError::MalformedRecord { .. }) => MALFORMED_RECORD,
        Some(DiagnosticError::FilterExhausted { .. }) => FILTER_EXHAUSTED,
        None => INVALID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::BitCriteria;
    use anyhow::Context;

    #[test]
    fn maps_wrapped_diagnostic_errors() {
        let err = Err::<(), _>(DiagnosticError::FilterExhausted {
            criteria: BitCriteria::LeastCommon,
            position: 5,
            remaining: 2,
        })
        .context("rate report")
        .expect_err("error");
        assert_eq!(for_error(&err), FILTER_EXHAUSTED);

        let err = anyhow::Error::new(DiagnosticError::MalformedRecord {
            line: 3,
            reason: "empty record".to_string(),
        });
        assert_eq!(for_error(&err), MALFORMED_RECORD);
    }

    #[test]
    fn other_errors_are_invalid() {
        let err = anyhow::anyhow!("width must be > 0");
        assert_eq!(for_error(&err), INVALID);
    }
}
