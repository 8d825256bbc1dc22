// crates/eb_cli/src/main.rs
//
// eb — equitable budget allocation CLI.
// Strictly offline & deterministic: local files in, JSON out, no RNG.

mod args;

use std::process::ExitCode;

use serde::Serialize;

use args::{parse_and_validate, parse_bounds_spec, Args};
use eb_io::solution::{write_solution, SolutionRecord};
use eb_io::{IoError, IoResult};
use eb_solver::{Bounds, BudgetAllocator, Region};

fn main() -> ExitCode {
    let args = match parse_and_validate() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("eb: error: {e}");
            return ExitCode::from(1);
        }
    };

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("eb: error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Run the whole request. Exit-code policy: 0 solved/validated,
/// 2 infeasible budget, 1 for everything else (via `Err`).
fn run(args: Args) -> Result<ExitCode, String> {
    let (bounds, file_budget) = load_inputs(&args).map_err(|e| e.to_string())?;
    let allocator = BudgetAllocator::new(bounds);

    if args.check {
        if !args.quiet {
            println!("eb: ok — {} slot(s) validated", allocator.len());
        }
        return Ok(ExitCode::SUCCESS);
    }

    if args.profile {
        print_profile(&allocator);
        return Ok(ExitCode::SUCCESS);
    }

    let budget = args
        .budget
        .or(file_budget)
        .ok_or("missing budget: pass --budget or set it in the problem file")?;

    let solved = if args.real {
        allocator
            .solve_real(budget)
            .map_err(IoError::from)
            .and_then(|values| emit(&args, budget, &allocator, values))
    } else {
        allocator
            .solve(budget)
            .map_err(IoError::from)
            .and_then(|values| emit(&args, budget, &allocator, values))
    };

    match solved {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(IoError::Infeasible(e)) => {
            eprintln!("eb: infeasible: {e}");
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Resolve the bound sequence (problem file XOR inline spec) plus the
/// file's default budget, if any.
fn load_inputs(args: &Args) -> IoResult<(Bounds, Option<i64>)> {
    if let Some(path) = &args.problem {
        let spec = eb_io::problem::load_problem(path)?;
        let bounds = spec.to_bounds()?;
        Ok((bounds, spec.budget))
    } else if let Some(spec) = &args.bounds {
        let pairs = parse_bounds_spec(spec).map_err(|e| IoError::Invalid(e.to_string()))?;
        let bounds = Bounds::from_pairs(pairs)?;
        Ok((bounds, None))
    } else {
        Err(IoError::Invalid("no input: pass --problem or --bounds".to_string()))
    }
}

/// Print the solution to stdout and optionally persist the artifact with
/// the feasible budget range echoed.
fn emit<T: Serialize>(
    args: &Args,
    budget: i64,
    allocator: &BudgetAllocator,
    values: Vec<T>,
) -> IoResult<()> {
    let line = if args.pretty {
        serde_json::to_string_pretty(&values)
    } else {
        serde_json::to_string(&values)
    }?;
    println!("{line}");

    if let Some(path) = &args.out {
        let record = SolutionRecord::new(
            budget,
            allocator.lower_bound().map(clamp_i64),
            allocator.upper_bound().map(clamp_i64),
            values,
        );
        write_solution(path, &record)?;
        if !args.quiet {
            eprintln!("eb: artifact written to {}", path.display());
        }
    }
    Ok(())
}

/// Aggregate bounds sum `i64` sides in `i128`; clamp back for the wire.
fn clamp_i64(v: i128) -> i64 {
    v.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Textual rendition of the budget table: the feasible range and one line
/// per linear region of `h`.
fn print_profile(allocator: &BudgetAllocator) {
    match (allocator.lower_bound(), allocator.upper_bound()) {
        (Some(lo), Some(hi)) => println!("feasible budgets: [{lo}, {hi}]"),
        (Some(lo), None) => println!("feasible budgets: [{lo}, +inf)"),
        (None, Some(hi)) => println!("feasible budgets: (-inf, {hi}]"),
        (None, None) => println!("feasible budgets: (-inf, +inf)"),
    }

    let table = allocator.table();
    if table.is_empty() {
        println!("unconstrained: level = budget / {}", allocator.len());
        return;
    }

    let keys = table.keys();
    let regions = table.regions();
    if allocator.lower_bound().is_none() {
        println!(
            "budget < {}: x < {}, rate {}",
            keys[0],
            regions[0].x,
            allocator.bounds().lower_unbounded()
        );
    }
    for k in 0..keys.len() {
        let Region { x, rate } = regions[k];
        match keys.get(k + 1) {
            Some(next) => println!("budget [{}, {}): x from {x}, rate {rate}", keys[k], next),
            None if rate == 0 => println!("budget = {}: all slots pinned at x = {x}", keys[k]),
            None => println!("budget >= {}: x from {x}, rate {rate}", keys[k]),
        }
    }
}
