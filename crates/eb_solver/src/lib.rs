//! eb_solver — water-filling solver for equitable integer allocation.
//!
//! Given per-slot optional integer bounds and an integer budget, find the
//! integer vector that meets every bound, sums exactly to the budget, and
//! keeps all non-pinned values within one unit of each other (the integer
//! rounding of the continuous water-filling optimum).
//!
//! The monotone piecewise-linear structure of `h(x) = Σ clip(x, l_i, u_i)`
//! is precomputed into a budget-indexed table once, so solving is a binary
//! search plus one linear pass; no iterative optimization.
//!
//! No RNG, no floats on the solve path: the water level is an exact
//! rational and the distribution works on integer deficits. Allocators
//! are immutable after construction; `solve` is a pure function of
//! `(bounds, budget)` and safe to call through shared references.

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use core::fmt;

pub mod allocator;
pub mod table;

mod distribute;

pub use allocator::BudgetAllocator;
pub use table::{Region, SolutionTable};

// Re-export the shared core surface so callers can depend on one crate.
pub use eb_core::{Bound, Bounds, BudgetError, ConstraintError};

/// Error from the one-shot [`solve`] helper: either stage can fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolveError {
    Constraint(ConstraintError),
    Budget(BudgetError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Constraint(e) => write!(f, "{e}"),
            SolveError::Budget(e) => write!(f, "{e}"),
        }
    }
}

impl From<ConstraintError> for SolveError {
    fn from(e: ConstraintError) -> Self {
        SolveError::Constraint(e)
    }
}

impl From<BudgetError> for SolveError {
    fn from(e: BudgetError) -> Self {
        SolveError::Budget(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SolveError {}

/// One-shot convenience: validate `pairs`, build an allocator, solve
/// `budget`. Prefer [`BudgetAllocator`] when solving repeatedly for the
/// same bounds.
pub fn solve<I>(pairs: I, budget: i64) -> Result<alloc::vec::Vec<i64>, SolveError>
where
    I: IntoIterator<Item = (Option<i64>, Option<i64>)>,
{
    let allocator = BudgetAllocator::from_pairs(pairs)?;
    Ok(allocator.solve(budget)?)
}
