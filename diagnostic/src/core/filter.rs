//! Bit-criteria filter.
//!
//! Narrows a candidate pool one bit position at a time, keeping only the
//! readings whose bit matches the pool's (possibly inverted) most common bit,
//! until a single reading survives.

use tracing::{debug, trace};

use crate::core::tally::most_common_bit;
use crate::core::types::{BitCriteria, Reading};
use crate::error::DiagnosticError;

/// One filtering step: the readings of `pool` whose bit at `position` matches
/// the target bit chosen by `criteria`.
///
/// Returns a fresh pool; `pool` itself is left untouched.
///
/// # Panics
///
/// Panics if any reading in `pool` is not wider than `position`. Pools taken
/// from a [`Report`](crate::core::types::Report) share one width, so this only
/// happens for hand-built pools of mixed width.
pub fn narrow(pool: &[Reading], position: usize, criteria: BitCriteria) -> Vec<Reading> {
    let target = criteria.target(most_common_bit(pool, position));
    let narrowed: Vec<Reading> = pool
        .iter()
        .filter(|reading| reading.bit(position) == target)
        .cloned()
        .collect();
    trace!(
        %criteria,
        position,
        bit = %target.as_char(),
        before = pool.len(),
        after = narrowed.len(),
        "narrowed pool"
    );
    narrowed
}

/// Filter `pool` from `position` onward until one reading remains.
///
/// A singleton pool is returned as-is without inspecting any bit, whatever
/// `position` is. Running out of bit positions with several candidates left,
/// or emptying the pool, yields [`DiagnosticError::FilterExhausted`].
///
/// # Panics
///
/// Panics if `pool` mixes reading widths and a narrower reading is still a
/// candidate when `position` passes its width; see [`narrow`].
pub fn filter(
    pool: &[Reading],
    position: usize,
    criteria: BitCriteria,
) -> Result<Reading, DiagnosticError> {
    match pool {
        [survivor] => Ok(survivor.clone()),
        [] => Err(exhausted(criteria, position, 0)),
        [first, ..] if position >= first.width() => Err(exhausted(criteria, position, pool.len())),
        _ => filter(&narrow(pool, position, criteria), position + 1, criteria),
    }
}

/// Run the filter over a whole report, starting at the leftmost bit.
pub fn rating_reading(
    pool: &[Reading],
    criteria: BitCriteria,
) -> Result<Reading, DiagnosticError> {
    let survivor = filter(pool, 0, criteria)?;
    debug!(%criteria, candidates = pool.len(), %survivor, "filter converged");
    Ok(survivor)
}

fn exhausted(criteria: BitCriteria, position: usize, remaining: usize) -> DiagnosticError {
    DiagnosticError::FilterExhausted {
        criteria,
        position,
        remaining,
    }
}
