//! Integer distribution of the continuous solution.
//!
//! At the solved level every non-pinned slot holds the same value, so
//! `budget - Σ pinned` splits across them as `m · level`. Floor the level
//! into each of them, then hand the remaining integer deficit out one
//! unit at a time in input order. Pinned slots have zero fractional part
//! and never receive a unit, so bounds survive and any two non-pinned
//! values end up within one unit of each other.

use alloc::vec::Vec;

use eb_core::rounding::Ratio;
use eb_core::Bounds;

use crate::allocator::pin;

/// Exact integer allocation for `budget` at the solved `level`. The
/// caller guarantees `level` inverts `h` at `budget`, which makes the
/// deficit a whole number in `[0, open slots)`.
pub(crate) fn integral(bounds: &Bounds, level: Ratio, budget: i64) -> Vec<i64> {
    let floor = level.floor();

    let mut values: Vec<i128> = Vec::with_capacity(bounds.len());
    let mut open: Vec<usize> = Vec::new();
    for (i, b) in bounds.iter().enumerate() {
        match pin(b, level) {
            Some(v) => values.push(v as i128),
            None => {
                open.push(i);
                values.push(floor);
            }
        }
    }

    let assigned: i128 = values.iter().sum();
    let mut deficit = budget as i128 - assigned;
    debug_assert!(
        deficit >= 0 && deficit <= open.len() as i128,
        "deficit {} outside [0, {}]",
        deficit,
        open.len()
    );

    for &i in &open {
        if deficit == 0 {
            break;
        }
        values[i] += 1;
        deficit -= 1;
    }

    values.into_iter().map(clamp_i64).collect()
}

/// Allocations derive from `i64` inputs; the clamp only guards
/// extrapolations brushing the integer limits.
fn clamp_i64(v: i128) -> i64 {
    if v > i64::MAX as i128 {
        i64::MAX
    } else if v < i64::MIN as i128 {
        i64::MIN
    } else {
        v as i64
    }
}
