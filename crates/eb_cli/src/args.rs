// crates/eb_cli/src/args.rs
//
// Deterministic, offline CLI argument parsing & validation.
// - Exactly one of: --problem XOR --bounds
// - Budget comes from --budget or the problem file; --profile/--check
//   need none
// - Inline bounds grammar: comma-separated `lower:upper` with empty
//   sides open, or a bare integer for a fixed slot ("5:10,5:,:3,7")

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "eb",
    about = "Equitable integer allocation of a budget under per-slot bounds"
)]
pub struct Args {
    /// Problem file (JSON: slots + optional budget).
    #[arg(long, conflicts_with = "bounds")]
    pub problem: Option<PathBuf>,

    /// Inline bounds, e.g. "5:10,5:,:3,7".
    #[arg(long)]
    pub bounds: Option<String>,

    /// Integer budget; overrides the problem file's value.
    #[arg(long, allow_hyphen_values = true)]
    pub budget: Option<i64>,

    /// Emit the continuous (real-valued) solution instead of integers.
    #[arg(long)]
    pub real: bool,

    /// Print the piecewise-linear budget table and exit.
    #[arg(long)]
    pub profile: bool,

    /// Validate inputs and exit.
    #[arg(long)]
    pub check: bool,

    /// Also write the solution as a JSON artifact.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Pretty-print the solution on stdout.
    #[arg(long)]
    pub pretty: bool,

    /// Suppress the human-readable notes on stderr.
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug)]
pub enum CliError {
    Missing(&'static str),
    BadCombo(&'static str),
    BadBounds(String),
    NotFound(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            Missing(s) => write!(f, "missing required flag: {}", s),
            BadCombo(s) => write!(f, "invalid flag combination: {}", s),
            BadBounds(s) => write!(f, "invalid bounds spec: {}", s),
            NotFound(p) => write!(f, "file not found: {}", p),
        }
    }
}

impl std::error::Error for CliError {}

/// Entry point used by main.rs.
pub fn parse_and_validate() -> Result<Args, CliError> {
    let args = Args::parse();
    validate(&args)?;
    Ok(args)
}

fn validate(args: &Args) -> Result<(), CliError> {
    match (&args.problem, &args.bounds) {
        (None, None) => return Err(CliError::Missing("--problem or --bounds")),
        (Some(_), Some(_)) => return Err(CliError::BadCombo("--problem conflicts with --bounds")),
        _ => {}
    }
    if let Some(p) = &args.problem {
        if !p.exists() {
            return Err(CliError::NotFound(p.display().to_string()));
        }
    }
    // A problem file may still carry its own budget; inline bounds cannot.
    if args.bounds.is_some() && args.budget.is_none() && !(args.profile || args.check) {
        return Err(CliError::Missing("--budget"));
    }
    Ok(())
}

/// Parse the inline bounds grammar into raw `(lower, upper)` pairs.
pub fn parse_bounds_spec(spec: &str) -> Result<Vec<(Option<i64>, Option<i64>)>, CliError> {
    let mut pairs = Vec::new();
    for (slot, token) in spec.split(',').enumerate() {
        let token = token.trim();
        if token.is_empty() {
            return Err(CliError::BadBounds(format!("slot {slot}: empty spec")));
        }
        let pair = match token.split_once(':') {
            // Bare integer: a slot fixed to a single value.
            None => {
                let v = parse_side(token, slot)?;
                (Some(v), Some(v))
            }
            Some((lo, hi)) => (opt_side(lo, slot)?, opt_side(hi, slot)?),
        };
        pairs.push(pair);
    }
    Ok(pairs)
}

fn opt_side(side: &str, slot: usize) -> Result<Option<i64>, CliError> {
    let side = side.trim();
    if side.is_empty() {
        return Ok(None);
    }
    parse_side(side, slot).map(Some)
}

fn parse_side(side: &str, slot: usize) -> Result<i64, CliError> {
    side.parse::<i64>()
        .map_err(|_| CliError::BadBounds(format!("slot {slot}: not an integer: {side:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_spec_grammar() {
        assert_eq!(
            parse_bounds_spec("5:10,5:,:3,7").expect("well-formed"),
            vec![
                (Some(5), Some(10)),
                (Some(5), None),
                (None, Some(3)),
                (Some(7), Some(7)),
            ]
        );
        // A lone colon is a fully free slot; negatives parse on both sides.
        assert_eq!(
            parse_bounds_spec(":,-5:-1").expect("well-formed"),
            vec![(None, None), (Some(-5), Some(-1))]
        );
    }

    #[test]
    fn bounds_spec_rejects_garbage() {
        assert!(matches!(parse_bounds_spec(""), Err(CliError::BadBounds(_))));
        assert!(matches!(parse_bounds_spec("1:2,"), Err(CliError::BadBounds(_))));
        assert!(matches!(parse_bounds_spec("a:2"), Err(CliError::BadBounds(_))));
        assert!(matches!(parse_bounds_spec("1:2:3"), Err(CliError::BadBounds(_))));
    }

    #[test]
    fn requires_an_input_source() {
        let args = Args::parse_from(["eb", "--budget", "10"]);
        assert!(matches!(validate(&args), Err(CliError::Missing(_))));
    }

    #[test]
    fn inline_bounds_need_a_budget_unless_inspecting() {
        let args = Args::parse_from(["eb", "--bounds", "1:2"]);
        assert!(matches!(validate(&args), Err(CliError::Missing("--budget"))));

        let args = Args::parse_from(["eb", "--bounds", "1:2", "--profile"]);
        assert!(validate(&args).is_ok());

        let args = Args::parse_from(["eb", "--bounds", "1:2", "--check"]);
        assert!(validate(&args).is_ok());

        let args = Args::parse_from(["eb", "--bounds", "1:2", "--budget", "-3"]);
        assert!(validate(&args).is_ok());
    }
}
