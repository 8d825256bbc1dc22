//! eb_io — problem and solution files for the allocation engine.
//!
//! Local JSON in, local JSON out; no network I/O. A shared error type
//! (`IoError`) with `From` conversions used across modules; the file
//! formats live in the submodules:
//!
//! - [`problem`]: `{ "slots": [...], "budget": ... }` inputs
//! - [`solution`]: solved-allocation artifacts, written atomically

#![forbid(unsafe_code)]

use thiserror::Error;

use eb_core::{BudgetError, ConstraintError};

/// Unified error for eb_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors (open, read, rename, ...).
    #[error("io/path error: {0}")]
    Path(String),

    /// JSON (de)serialization errors with an optional JSON Pointer hint.
    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    /// Problem-shape violations (crossed bounds, missing budget, ...).
    #[error("invalid problem: {0}")]
    Invalid(String),

    /// Infeasible budget reported by the solver; the problem itself
    /// stays usable with other budgets.
    #[error("infeasible budget: {0}")]
    Infeasible(BudgetError),
}

pub type IoResult<T> = Result<T, IoError>;

/* ---------------- From conversions (used by file modules) ---------------- */

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json reports line/column in its message; we default the
        // pointer to the document root.
        IoError::Json { pointer: "/".to_string(), msg: e.to_string() }
    }
}

impl From<ConstraintError> for IoError {
    fn from(e: ConstraintError) -> Self {
        IoError::Invalid(e.to_string())
    }
}

impl From<BudgetError> for IoError {
    fn from(e: BudgetError) -> Self {
        IoError::Infeasible(e)
    }
}

pub mod problem;
pub mod solution;

pub mod prelude {
    pub use crate::problem::{load_problem, parse_problem, ProblemSpec, SlotSpec};
    pub use crate::solution::{write_solution, SolutionRecord};
    pub use crate::{IoError, IoResult};
}
