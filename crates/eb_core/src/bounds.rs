//! Bound pairs and the validated bound sequence.
//!
//! A `Bound` is a pair of optional integer sides; absence means the slot
//! is unbounded on that side (never a sentinel value). `Bounds` owns the
//! ordered sequence, validated once on construction: a slot with both
//! sides present requires `lower <= upper`. The input order is the
//! canonical output order everywhere downstream.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ConstraintError;

/// One allocation slot's bounds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bound {
    pub lower: Option<i64>,
    pub upper: Option<i64>,
}

impl Bound {
    /// Slot unbounded on both sides.
    pub const FREE: Bound = Bound { lower: None, upper: None };

    pub fn new(lower: Option<i64>, upper: Option<i64>) -> Self {
        Self { lower, upper }
    }

    /// Degenerate slot pinned to a single value (`lower == upper`).
    pub fn fixed(value: i64) -> Self {
        Self { lower: Some(value), upper: Some(value) }
    }

    /// Clamp `x` into the bound; absent sides clamp nothing.
    pub fn clip(&self, x: i64) -> i64 {
        let mut v = x;
        if let Some(l) = self.lower {
            if v < l {
                v = l;
            }
        }
        if let Some(u) = self.upper {
            if v > u {
                v = u;
            }
        }
        v
    }
}

impl From<(Option<i64>, Option<i64>)> for Bound {
    fn from((lower, upper): (Option<i64>, Option<i64>)) -> Self {
        Self { lower, upper }
    }
}

/// Ordered, validated sequence of bounds. Immutable once built; two
/// sequences are equal iff elementwise equal in order.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Bounds(Vec<Bound>);

impl Bounds {
    /// Adopt a bound sequence after checking every slot. The order is
    /// preserved as given; no normalization.
    pub fn new(bounds: Vec<Bound>) -> Result<Self, ConstraintError> {
        for (slot, b) in bounds.iter().enumerate() {
            if let (Some(lower), Some(upper)) = (b.lower, b.upper) {
                if lower > upper {
                    return Err(ConstraintError { slot, lower, upper });
                }
            }
        }
        Ok(Self(bounds))
    }

    /// Convenience: validate raw `(lower, upper)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConstraintError>
    where
        I: IntoIterator<Item = (Option<i64>, Option<i64>)>,
    {
        Self::new(pairs.into_iter().map(Bound::from).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Bound> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Bound] {
        &self.0
    }

    /// Sum of lower bounds, present iff every slot has one. With any
    /// lower side absent the feasible range is open below and there is
    /// no aggregate to gate against.
    pub fn lower_bound(&self) -> Option<i128> {
        self.0
            .iter()
            .try_fold(0i128, |acc, b| b.lower.map(|l| acc + l as i128))
    }

    /// Sum of upper bounds, present iff every slot has one.
    pub fn upper_bound(&self) -> Option<i128> {
        self.0
            .iter()
            .try_fold(0i128, |acc, b| b.upper.map(|u| acc + u as i128))
    }

    /// Slots with no lower bound: active at every water level, and the
    /// growth rate left of the first breakpoint.
    pub fn lower_unbounded(&self) -> u32 {
        self.0.iter().filter(|b| b.lower.is_none()).count() as u32
    }

    /// Slots with no upper bound: the growth rate right of the last
    /// breakpoint.
    pub fn upper_unbounded(&self) -> u32 {
        self.0.iter().filter(|b| b.upper.is_none()).count() as u32
    }

    /// True iff no slot carries any bound (the solution table is empty).
    pub fn is_fully_unbounded(&self) -> bool {
        self.0.iter().all(|b| b.lower.is_none() && b.upper.is_none())
    }
}

impl<'a> IntoIterator for &'a Bounds {
    type Item = &'a Bound;
    type IntoIter = core::slice::Iter<'a, Bound>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn pairs(ps: &[(Option<i64>, Option<i64>)]) -> Bounds {
        Bounds::from_pairs(ps.iter().copied()).expect("valid bounds")
    }

    #[test]
    fn crossed_sides_are_rejected_with_the_slot_index() {
        let err = Bounds::from_pairs([
            (Some(0), Some(-4)),
            (Some(2), Some(3)),
            (None, Some(5)),
        ])
        .unwrap_err();
        assert_eq!(err, ConstraintError { slot: 0, lower: 0, upper: -4 });

        let err = Bounds::from_pairs([
            (Some(-4), Some(0)),
            (Some(3), Some(2)),
            (None, Some(5)),
        ])
        .unwrap_err();
        assert_eq!(err.slot, 1);

        // Fixing the order of the crossed slot makes the sequence valid.
        assert!(Bounds::from_pairs([
            (Some(-4), Some(0)),
            (Some(2), Some(3)),
            (None, Some(5)),
        ])
        .is_ok());
    }

    #[test]
    fn single_sided_and_free_slots_are_permitted() {
        let b = pairs(&[(None, None), (Some(1), None), (None, Some(-1))]);
        assert_eq!(b.len(), 3);
        assert_eq!(b.as_slice()[0], Bound::FREE);
    }

    #[test]
    fn aggregates_require_every_side_present() {
        let b = pairs(&[(Some(3), Some(5)), (Some(2), Some(50)), (Some(9), Some(15))]);
        assert_eq!(b.lower_bound(), Some(3 + 2 + 9));
        assert_eq!(b.upper_bound(), Some(5 + 50 + 15));

        let b = pairs(&[(None, Some(5)), (Some(2), Some(50)), (Some(9), Some(15))]);
        assert_eq!(b.lower_bound(), None);
        assert_eq!(b.upper_bound(), Some(5 + 50 + 15));

        let b = pairs(&[(Some(3), Some(5)), (Some(2), None), (Some(9), Some(15))]);
        assert_eq!(b.lower_bound(), Some(3 + 2 + 9));
        assert_eq!(b.upper_bound(), None);

        let b = pairs(&[(None, Some(5)), (Some(2), Some(50)), (Some(9), None)]);
        assert_eq!(b.lower_bound(), None);
        assert_eq!(b.upper_bound(), None);
    }

    #[test]
    fn unbounded_side_counts() {
        let b = pairs(&[(None, None), (Some(1), None), (None, Some(4)), (Some(0), Some(9))]);
        assert_eq!(b.lower_unbounded(), 2);
        assert_eq!(b.upper_unbounded(), 2);
        assert!(!b.is_fully_unbounded());
        assert!(pairs(&[(None, None), (None, None)]).is_fully_unbounded());
    }

    #[test]
    fn clip_applies_present_sides_only() {
        let b = Bound::new(Some(-5), Some(10));
        assert_eq!(b.clip(-8), -5);
        assert_eq!(b.clip(3), 3);
        assert_eq!(b.clip(12), 10);

        let half = Bound::new(Some(5), None);
        assert_eq!(half.clip(2), 5);
        assert_eq!(half.clip(1_000), 1_000);

        assert_eq!(Bound::fixed(7).clip(0), 7);
        assert_eq!(Bound::FREE.clip(-3), -3);
    }

    #[test]
    fn equality_is_elementwise_in_order() {
        let a = pairs(&[(Some(1), Some(2)), (None, None)]);
        let b = pairs(&[(Some(1), Some(2)), (None, None)]);
        let c = pairs(&[(None, None), (Some(1), Some(2))]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn empty_sequence_has_vacuous_aggregates() {
        let b = Bounds::new(vec![]).expect("empty is valid");
        assert_eq!(b.lower_bound(), Some(0));
        assert_eq!(b.upper_bound(), Some(0));
        assert_eq!(b.lower_unbounded(), 0);
    }
}
