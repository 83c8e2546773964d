#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod entries;
pub mod pair;
mod prelude;
pub mod report;
pub mod solution;
pub mod triple;

pub use entries::Entries;
pub use pair::{find_pair, find_pair_lazy, PartOne, PartOneAlt};
pub use report::{solve_all, SOLVERS};
pub use solution::{SearchError, Solution, TARGET};
pub use triple::{find_triple, find_triple_combinations, PartTwo, PartTwoAlt};
