//! Report loading with record validation.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::types::{Reading, Report};
use crate::error::DiagnosticError;

/// Read and validate the report at `path`.
///
/// Every record is checked before anything is returned, so a malformed line
/// anywhere in the file fails the whole load. Only a failed read is
/// [`DiagnosticError::InputUnavailable`]; bad bytes inside a record are
/// [`DiagnosticError::MalformedRecord`].
pub fn load_report(path: &Path, expected_width: Option<usize>) -> Result<Report, DiagnosticError> {
    let contents = fs::read(path).map_err(|source| DiagnosticError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let report = parse_report_bytes(&contents, expected_width)?;
    debug!(
        path = %path.display(),
        readings = report.len(),
        width = report.width(),
        "report loaded"
    );
    Ok(report)
}

/// Parse newline-delimited binary strings.
///
/// `\r\n` line endings and a final trailing newline are accepted; blank lines
/// are not.
pub fn parse_report(
    contents: &str,
    expected_width: Option<usize>,
) -> Result<Report, DiagnosticError> {
    parse_report_bytes(contents.as_bytes(), expected_width)
}

/// Byte-level variant of [`parse_report`]; a record that is not valid UTF-8
/// is malformed.
pub fn parse_report_bytes(
    contents: &[u8],
    expected_width: Option<usize>,
) -> Result<Report, DiagnosticError> {
    let body = contents.strip_suffix(b"\n").unwrap_or(contents);
    let readings = if body.is_empty() {
        Vec::new()
    } else {
        body.split(|byte| *byte == b'\n')
            .enumerate()
            .map(|(index, record)| parse_record(index + 1, record))
            .collect::<Result<Vec<_>, _>>()?
    };
    Report::new(readings, expected_width)
}

fn parse_record(line: usize, record: &[u8]) -> Result<Reading, DiagnosticError> {
    let record = record.strip_suffix(b"\r").unwrap_or(record);
    let text = std::str::from_utf8(record).map_err(|err| DiagnosticError::MalformedRecord {
        line,
        reason: format!("invalid UTF-8 at byte {}", err.valid_up_to() + 1),
    })?;
    text.parse::<Reading>().map_err(|err| DiagnosticError::MalformedRecord {
        line,
        reason: err.to_string(),
    })
}
