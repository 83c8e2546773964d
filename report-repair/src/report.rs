use crate::{
    entries::Entries,
    pair::{PartOne, PartOneAlt},
    solution::{SearchError, Solution},
    triple::{PartTwo, PartTwoAlt},
};
use anyhow::{bail, Result};
use aoc_runner::{run_all, DynSolver};

/// Every search, in the order it is run and printed.
pub const SOLVERS: [DynSolver<'static, Entries, Solution, SearchError>; 4] =
    [&PartOne, &PartOneAlt, &PartTwo, &PartTwoAlt];

/// Runs every search over `entries`, failing if any of them found nothing.
pub fn solve_all(entries: &Entries) -> Result<Vec<Solution>> {
    let outcomes = run_all(&SOLVERS, entries);
    let failed = outcomes.iter().filter(|outcome| outcome.is_err()).count();

    if failed > 0 {
        let total = SOLVERS.len();
        bail!("{failed} of {total} searches found no solution");
    }

    Ok(outcomes.into_iter().flatten().collect())
}
