//! Test-only helpers for building readings and report files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::types::{Reading, Report};

/// Twelve 5-bit readings with known ratings (gamma 22, epsilon 9,
/// oxygen generator 23, CO2 scrubber 10).
pub const SAMPLE_REPORT: &[&str] = &[
    "00100", "11110", "10110", "10111", "10101", "01111", "00111", "11100", "10000", "11001",
    "00010", "01010",
];

/// Parse each string as a reading; panics on invalid input.
pub fn readings(lines: &[&str]) -> Vec<Reading> {
    lines
        .iter()
        .map(|line| line.parse().expect("test reading"))
        .collect()
}

pub fn sample_report() -> Report {
    Report::new(readings(SAMPLE_REPORT), None).expect("sample report")
}

/// Temporary directory holding report and config files for a test.
pub struct ReportDir {
    temp: TempDir,
}

impl ReportDir {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { temp })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write `lines` newline-terminated into `name` and return the path.
    pub fn write_report(&self, name: &str, lines: &[&str]) -> Result<PathBuf> {
        let mut contents = lines.join("\n");
        contents.push('\n');
        self.write(name, &contents)
    }

    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        self.write_bytes(name, contents.as_bytes())
    }

    pub fn write_bytes(&self, name: &str, contents: &[u8]) -> Result<PathBuf> {
        let path = self.temp.path().join(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
