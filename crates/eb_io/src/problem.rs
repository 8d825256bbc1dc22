//! Problem files.
//!
//! ```json
//! { "slots": [ { "lower": 5, "upper": 10 }, { "lower": 5 }, {} ],
//!   "budget": 100 }
//! ```
//!
//! Absent sides are `null` or omitted; absence is the representation of
//! "unbounded", never a sentinel number. `budget` may be omitted when the
//! caller supplies one (the CLI flag overrides the file either way).
//! Unknown fields are rejected so typos fail loudly.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use eb_core::Bounds;

use crate::{IoError, IoResult};

/// One slot's bounds on the wire.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<i64>,
}

/// A full problem: slots plus an optional default budget.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemSpec {
    pub slots: Vec<SlotSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<i64>,
}

impl ProblemSpec {
    /// Funnel the wire slots through core validation, keeping file order.
    pub fn to_bounds(&self) -> IoResult<Bounds> {
        Bounds::from_pairs(self.slots.iter().map(|s| (s.lower, s.upper))).map_err(IoError::from)
    }
}

/// Read and parse a problem file from a local path.
pub fn load_problem(path: &Path) -> IoResult<ProblemSpec> {
    let mut buf = String::new();
    File::open(path)
        .map_err(|e| IoError::Path(format!("{}: {e}", path.display())))?
        .read_to_string(&mut buf)
        .map_err(|e| IoError::Path(format!("{}: {e}", path.display())))?;
    parse_problem(&buf)
}

/// Parse problem JSON from an in-memory string.
pub fn parse_problem(json: &str) -> IoResult<ProblemSpec> {
    let spec: ProblemSpec = serde_json::from_str(json)?;
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_nulls_and_omitted_sides_as_unbounded() {
        let spec = parse_problem(
            r#"{ "slots": [ { "lower": 5, "upper": 10 },
                            { "lower": 5, "upper": null },
                            {} ],
                 "budget": 100 }"#,
        )
        .expect("well-formed problem");
        assert_eq!(spec.budget, Some(100));
        assert_eq!(spec.slots.len(), 3);
        assert_eq!(spec.slots[1], SlotSpec { lower: Some(5), upper: None });
        assert_eq!(spec.slots[2], SlotSpec::default());

        let bounds = spec.to_bounds().expect("ordered bounds");
        assert_eq!(bounds.len(), 3);
        assert_eq!(bounds.lower_bound(), None);
    }

    #[test]
    fn budget_is_optional() {
        let spec = parse_problem(r#"{ "slots": [ {} ] }"#).expect("well-formed");
        assert_eq!(spec.budget, None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse_problem(r#"{ "slots": [], "bugdet": 5 }"#).unwrap_err();
        assert!(matches!(err, IoError::Json { .. }));
    }

    #[test]
    fn crossed_bounds_surface_as_invalid() {
        let spec = parse_problem(
            r#"{ "slots": [ { "lower": 0, "upper": -4 }, { "lower": 2, "upper": 3 } ] }"#,
        )
        .expect("parse succeeds; validation is separate");
        let err = spec.to_bounds().unwrap_err();
        match err {
            IoError::Invalid(msg) => assert!(msg.contains("slot 0")),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn loads_from_a_local_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "slots": [ {{ "lower": 1 }} ], "budget": 7 }}"#).expect("write");

        let spec = load_problem(file.path()).expect("load");
        assert_eq!(spec.budget, Some(7));
        assert_eq!(spec.slots, vec![SlotSpec { lower: Some(1), upper: None }]);
    }

    #[test]
    fn missing_files_report_the_path() {
        let err = load_problem(Path::new("does/not/exist.json")).unwrap_err();
        match err {
            IoError::Path(msg) => assert!(msg.contains("does/not/exist.json")),
            other => panic!("expected Path, got {other:?}"),
        }
    }
}
