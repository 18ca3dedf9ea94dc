//! Value types shared by the diagnostic core.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{DiagnosticError, ReadingError};

/// Widest reading accepted; decoded values must fit in a `u32`.
pub const MAX_WIDTH: usize = 32;

/// A single binary digit of a reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn flip(self) -> Bit {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }

    pub fn from_char(c: char) -> Option<Bit> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

/// Tie-break policy applied at each filtering step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BitCriteria {
    /// Keep readings matching the most common bit (ties keep `1`).
    MostCommon,
    /// Keep readings matching the inverse of the most common bit (ties keep `0`).
    LeastCommon,
}

impl BitCriteria {
    /// Map the `invert` flag of the filter onto a policy.
    pub fn from_invert(invert: bool) -> Self {
        if invert {
            BitCriteria::LeastCommon
        } else {
            BitCriteria::MostCommon
        }
    }

    pub fn is_inverted(self) -> bool {
        matches!(self, BitCriteria::LeastCommon)
    }

    /// Bit a candidate must carry to survive, given the pool's most common bit.
    pub fn target(self, most_common: Bit) -> Bit {
        if self.is_inverted() {
            most_common.flip()
        } else {
            most_common
        }
    }
}

impl fmt::Display for BitCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitCriteria::MostCommon => f.write_str("most common"),
            BitCriteria::LeastCommon => f.write_str("least common"),
        }
    }
}

/// Fixed-width binary string, position 0 being the most significant bit.
///
/// Always holds between 1 and [`MAX_WIDTH`] bits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reading {
    bits: Vec<Bit>,
}

impl Reading {
    pub fn from_bits(bits: Vec<Bit>) -> Result<Self, ReadingError> {
        if bits.is_empty() {
            return Err(ReadingError::Empty);
        }
        if bits.len() > MAX_WIDTH {
            return Err(ReadingError::TooWide { width: bits.len() });
        }
        Ok(Self { bits })
    }

    /// Build a reading of `width` bits from a per-position generator.
    ///
    /// Callers pass the width of an existing reading, so the width bound holds.
    pub(crate) fn from_fn(width: usize, bit_at: impl FnMut(usize) -> Bit) -> Self {
        debug_assert!((1..=MAX_WIDTH).contains(&width));
        Self {
            bits: (0..width).map(bit_at).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Bit at `position`, counted from the left.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.width()`.
    pub fn bit(&self, position: usize) -> Bit {
        self.bits[position]
    }

    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    pub fn inverted(&self) -> Reading {
        Self {
            bits: self.bits.iter().map(|bit| bit.flip()).collect(),
        }
    }
}

impl FromStr for Reading {
    type Err = ReadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .enumerate()
            .map(|(index, c)| {
                Bit::from_char(c).ok_or(ReadingError::InvalidCharacter {
                    found: c,
                    column: index + 1,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Reading::from_bits(bits)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit.as_char())?;
        }
        Ok(())
    }
}

impl Serialize for Reading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The measurement set: a non-empty, immutable list of equal-width readings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    readings: Vec<Reading>,
    width: usize,
}

impl Report {
    /// Validate that every reading shares one width.
    ///
    /// With `expected_width` set, that width is enforced; otherwise the first
    /// reading establishes it. Errors name the 1-based record number.
    pub fn new(
        readings: Vec<Reading>,
        expected_width: Option<usize>,
    ) -> Result<Self, DiagnosticError> {
        let first = readings
            .first()
            .ok_or_else(|| DiagnosticError::MalformedRecord {
                line: 1,
                reason: "report contains no readings".to_string(),
            })?;
        let width = expected_width.unwrap_or_else(|| first.width());
        for (index, reading) in readings.iter().enumerate() {
            if reading.width() != width {
                return Err(DiagnosticError::MalformedRecord {
                    line: index + 1,
                    reason: format!(
                        "expected {} bits but found {} in {:?}",
                        width,
                        reading.width(),
                        reading.to_string()
                    ),
                });
            }
        }
        Ok(Self { readings, width })
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(s: &str) -> Reading {
        s.parse().expect("reading")
    }

    #[test]
    fn parse_and_display_preserve_bits() {
        let parsed = reading("01101");
        assert_eq!(parsed.width(), 5);
        assert_eq!(parsed.bit(0), Bit::Zero);
        assert_eq!(parsed.bit(1), Bit::One);
        assert_eq!(parsed.to_string(), "01101");
    }

    #[test]
    fn parse_rejects_invalid_character_with_column() {
        let err = "01201".parse::<Reading>().expect_err("invalid");
        assert_eq!(
            err,
            ReadingError::InvalidCharacter {
                found: '2',
                column: 3
            }
        );
    }

    #[test]
    fn parse_rejects_empty_and_too_wide() {
        assert_eq!("".parse::<Reading>(), Err(ReadingError::Empty));
        let wide = "1".repeat(MAX_WIDTH + 1);
        assert_eq!(
            wide.parse::<Reading>(),
            Err(ReadingError::TooWide {
                width: MAX_WIDTH + 1
            })
        );
        assert!("1".repeat(MAX_WIDTH).parse::<Reading>().is_ok());
    }

    #[test]
    fn inverted_flips_every_bit() {
        assert_eq!(reading("01010").inverted(), reading("10101"));
    }

    #[test]
    fn criteria_target_flips_only_when_inverted() {
        assert_eq!(BitCriteria::MostCommon.target(Bit::One), Bit::One);
        assert_eq!(BitCriteria::LeastCommon.target(Bit::One), Bit::Zero);
        assert_eq!(BitCriteria::from_invert(true), BitCriteria::LeastCommon);
        assert_eq!(BitCriteria::from_invert(false), BitCriteria::MostCommon);
    }

    #[test]
    fn report_rejects_width_mismatch_with_record_number() {
        let err = Report::new(vec![reading("00100"), reading("1111"), reading("10110")], None)
            .expect_err("mismatch");
        match err {
            DiagnosticError::MalformedRecord { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("expected 5 bits but found 4"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn report_enforces_expected_width() {
        let err = Report::new(vec![reading("00100")], Some(12)).expect_err("width");
        assert!(matches!(err, DiagnosticError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn report_rejects_empty_input() {
        let err = Report::new(Vec::new(), None).expect_err("empty");
        assert!(err.to_string().contains("no readings"));
    }
}
