//! Budget allocator: feasibility gate, region lookup, evaluation, and the
//! public solve surface.
//!
//! Inputs:
//! - `bounds`: validated per-slot optional integer bounds (input order is
//!   output order)
//! - `budget`: integer total to allocate
//!
//! Outputs:
//! - `solve`: integer allocation meeting every bound, summing to the
//!   budget, with all non-pinned values within one unit of each other
//! - `solve_real`: the continuous water-filling optimum (pinned slots at
//!   their bound, the rest at the shared level)
//!
//! The allocator is immutable after construction; solving reads the
//! precomputed table and allocates only the output vector.

use alloc::vec::Vec;

use eb_core::rounding::Ratio;
use eb_core::{Bound, Bounds, BudgetError, ConstraintError};

use crate::distribute;
use crate::table::{Region, SolutionTable};

/// Solver for the most-equitable allocation of an integer budget under
/// per-slot bounds.
#[derive(Clone, Debug)]
pub struct BudgetAllocator {
    bounds: Bounds,
    table: SolutionTable,
}

/// Allocators are equal iff their bound sequences are elementwise equal;
/// the table is derived state and never compared.
impl PartialEq for BudgetAllocator {
    fn eq(&self, other: &Self) -> bool {
        self.bounds == other.bounds
    }
}

impl Eq for BudgetAllocator {}

impl BudgetAllocator {
    /// Precompute the solution table for an already-validated sequence.
    pub fn new(bounds: Bounds) -> Self {
        let table = SolutionTable::build(&bounds);
        Self { bounds, table }
    }

    /// Validate raw `(lower, upper)` pairs and build.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConstraintError>
    where
        I: IntoIterator<Item = (Option<i64>, Option<i64>)>,
    {
        Ok(Self::new(Bounds::from_pairs(pairs)?))
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn table(&self) -> &SolutionTable {
        &self.table
    }

    /// Number of allocation slots.
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Smallest feasible budget, present iff every slot has a lower bound.
    pub fn lower_bound(&self) -> Option<i128> {
        self.bounds.lower_bound()
    }

    /// Largest feasible budget, present iff every slot has an upper bound.
    pub fn upper_bound(&self) -> Option<i128> {
        self.bounds.upper_bound()
    }

    /// Most-equitable integer allocation summing exactly to `budget`, in
    /// input order.
    pub fn solve(&self, budget: i64) -> Result<Vec<i64>, BudgetError> {
        let level = self.level_for(budget)?;
        Ok(distribute::integral(&self.bounds, level, budget))
    }

    /// Continuous water-filling solution: pinned slots sit at their bound,
    /// every other slot at the shared level.
    pub fn solve_real(&self, budget: i64) -> Result<Vec<f64>, BudgetError> {
        let level = self.level_for(budget)?;
        Ok(self
            .bounds
            .iter()
            .map(|b| match pin(b, level) {
                Some(v) => v as f64,
                None => level.as_f64(),
            })
            .collect())
    }

    /// Bounded allocations at integer level `x` (each slot clipped).
    pub fn evaluate(&self, x: i64) -> Vec<i64> {
        self.bounds.iter().map(|b| b.clip(x)).collect()
    }

    /// Total allocation at integer level `x`: the piecewise-linear `h`.
    pub fn h(&self, x: i64) -> i128 {
        self.bounds.iter().map(|b| b.clip(x) as i128).sum()
    }

    /// Water level for `budget`, or the budget error when infeasible.
    fn level_for(&self, budget: i64) -> Result<Ratio, BudgetError> {
        let b = budget as i128;

        if let Some(lower_bound) = self.lower_bound() {
            if b < lower_bound {
                return Err(BudgetError::Insufficient { budget, lower_bound });
            }
        }
        if let Some(upper_bound) = self.upper_bound() {
            if b > upper_bound {
                return Err(BudgetError::Excess { budget, upper_bound });
            }
        }

        // No bounds at all: every slot shares the level budget / n. The
        // gate above pins the empty problem to budget 0.
        if self.table.is_empty() {
            let n = self.bounds.len() as i128;
            if n == 0 {
                return Ok(Ratio::from_int(0));
            }
            return Ok(Ratio::new(b, n));
        }

        let keys = self.table.keys();
        let regions = self.table.regions();
        match self.table.locate(b) {
            // Below the first breakpoint: every lower-bounded slot is
            // pinned and the rest extend linearly leftward. The gate
            // admits such budgets only when some lower side is absent.
            None => {
                let free = self.bounds.lower_unbounded() as i128;
                debug_assert!(free > 0, "budget below keys[0] implies an open lower side");
                let Region { x, .. } = regions[0];
                Ok(Ratio::new(x as i128 * free + (b - keys[0]), free))
            }
            Some(k) => {
                let Region { x, rate } = regions[k];
                if rate == 0 {
                    // Single-point region: all slots pinned; the gate and
                    // zero-width coalescing leave only budget == key here.
                    debug_assert_eq!(b, keys[k]);
                    Ok(Ratio::from_int(x as i128))
                } else {
                    let rate = rate as i128;
                    Ok(Ratio::new(x as i128 * rate + (b - keys[k]), rate))
                }
            }
        }
    }
}

/// Bound value the slot is pinned to at `level`, or `None` when the slot
/// rides the level. A slot exactly at a bound rides the level: the
/// numeric value is the same either way, and it must stay eligible for
/// the integer distribution.
pub(crate) fn pin(bound: &Bound, level: Ratio) -> Option<i64> {
    use core::cmp::Ordering;

    if let Some(l) = bound.lower {
        if level.cmp_int(l) == Ordering::Less {
            return Some(l);
        }
    }
    if let Some(u) = bound.upper {
        if level.cmp_int(u) == Ordering::Greater {
            return Some(u);
        }
    }
    None
}
