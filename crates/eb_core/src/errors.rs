//! Flat error taxonomy: three disjoint kinds, no hierarchy.
//!
//! `ConstraintError` is raised at construction only; both `BudgetError`
//! variants are raised from `solve` and leave the allocator valid for
//! other budgets. None of these are retriable.

use core::fmt;

/// A slot whose finite sides cross (`lower > upper`). The allocator
/// cannot be built from such a sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConstraintError {
    /// Zero-based position of the offending slot in the input order.
    pub slot: usize,
    pub lower: i64,
    pub upper: i64,
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slot {}: lower bound {} exceeds upper bound {}",
            self.slot, self.lower, self.upper
        )
    }
}

/// The requested budget lies outside the feasible range.
///
/// A side can only be infeasible when every slot carries that side: a
/// single unbounded side makes the range open in that direction and the
/// solver extrapolates instead of failing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BudgetError {
    /// Budget below the sum of lower bounds.
    Insufficient { budget: i64, lower_bound: i128 },
    /// Budget above the sum of upper bounds.
    Excess { budget: i64, upper_bound: i128 },
}

impl fmt::Display for BudgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetError::Insufficient { budget, lower_bound } => write!(
                f,
                "budget {budget} is below the feasible minimum {lower_bound}"
            ),
            BudgetError::Excess { budget, upper_bound } => write!(
                f,
                "budget {budget} is above the feasible maximum {upper_bound}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConstraintError {}

#[cfg(feature = "std")]
impl std::error::Error for BudgetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_slot_and_sides() {
        let e = ConstraintError { slot: 2, lower: 0, upper: -4 };
        assert_eq!(e.to_string(), "slot 2: lower bound 0 exceeds upper bound -4");
    }

    #[test]
    fn budget_errors_carry_the_violated_aggregate() {
        let e = BudgetError::Insufficient { budget: -6, lower_bound: -5 };
        assert_eq!(e.to_string(), "budget -6 is below the feasible minimum -5");

        let e = BudgetError::Excess { budget: 61, upper_bound: 60 };
        assert_eq!(e.to_string(), "budget 61 is above the feasible maximum 60");
    }
}
