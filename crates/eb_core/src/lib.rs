//! eb_core — Core types for the equitable budget allocation engine.
//!
//! This crate is **I/O-free**. It defines the stable types shared by the
//! solver and front-end crates (`eb_solver`, `eb_io`, `eb_cli`):
//!
//! - `Bound` / `Bounds`: per-slot optional integer bounds, validated once
//! - Aggregate feasibility properties (`lower_bound`, `upper_bound`,
//!   unbounded-side counts)
//! - Flat error taxonomy: `ConstraintError` (construction) and
//!   `BudgetError` (solve time)
//! - Integer-first exact rational (`rounding::Ratio`) used to carry the
//!   water level without floats
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bounds;
pub mod errors;
pub mod rounding;

pub use bounds::{Bound, Bounds};
pub use errors::{BudgetError, ConstraintError};
