//! Solution artifacts.
//!
//! Serialized with the struct's stable field order, pretty-printed,
//! LF-terminated, and written atomically (sibling temp file + rename) so
//! a reader never observes a torn artifact.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{IoError, IoResult};

/// A solved allocation in input order, echoing the feasible budget range
/// where the corresponding side is fully bounded. `T` is `i64` for
/// integer solutions and `f64` for continuous ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionRecord<T> {
    pub n: usize,
    pub budget: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feasible_lower: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feasible_upper: Option<i64>,
    pub allocations: Vec<T>,
}

impl<T> SolutionRecord<T> {
    pub fn new(
        budget: i64,
        feasible_lower: Option<i64>,
        feasible_upper: Option<i64>,
        allocations: Vec<T>,
    ) -> Self {
        Self {
            n: allocations.len(),
            budget,
            feasible_lower,
            feasible_upper,
            allocations,
        }
    }
}

/// Serialize `record` and atomically replace `path`.
pub fn write_solution<T: Serialize>(path: &Path, record: &SolutionRecord<T>) -> IoResult<()> {
    let mut bytes = serde_json::to_vec_pretty(record)?;
    bytes.push(b'\n');
    write_bytes_atomically(path, &bytes)
}

/// Write via a sibling temp file, flush to disk, then rename over `path`.
pub fn write_bytes_atomically(path: &Path, bytes: &[u8]) -> IoResult<()> {
    let tmp = path.with_extension("json.tmp");
    {
        let mut f = fs::File::create(&tmp)
            .map_err(|e| IoError::Path(format!("{}: {e}", tmp.display())))?;
        f.write_all(bytes)
            .map_err(|e| IoError::Path(format!("{}: {e}", tmp.display())))?;
        f.sync_all()
            .map_err(|e| IoError::Path(format!("{}: {e}", tmp.display())))?;
    }
    fs::rename(&tmp, path)
        .map_err(|e| IoError::Path(format!("{} -> {}: {e}", tmp.display(), path.display())))?;
    Ok(())
}
