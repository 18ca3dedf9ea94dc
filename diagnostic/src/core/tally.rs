//! Majority-bit tallies over a candidate pool.

use crate::core::types::{Bit, Reading, Report};

/// Signed tally at `position`: +1 for every `1`, -1 for every `0`.
///
/// # Panics
///
/// Panics if any reading in `pool` is not wider than `position`.
pub fn tally(pool: &[Reading], position: usize) -> i64 {
    pool.iter()
        .map(|reading| match reading.bit(position) {
            Bit::One => 1,
            Bit::Zero => -1,
        })
        .sum()
}

/// Most common bit at `position`; a tie (tally of zero) resolves to `1`.
///
/// An empty pool tallies to zero and therefore also yields `1`.
pub fn most_common_bit(pool: &[Reading], position: usize) -> Bit {
    if tally(pool, position) >= 0 {
        Bit::One
    } else {
        Bit::Zero
    }
}

/// Reading built from the most common bit at every position of the report.
pub fn gamma_reading(report: &Report) -> Reading {
    Reading::from_fn(report.width(), |position| {
        most_common_bit(report.readings(), position)
    })
}

/// Bitwise inverse of [`gamma_reading`].
pub fn epsilon_reading(report: &Report) -> Reading {
    gamma_reading(report).inverted()
}
