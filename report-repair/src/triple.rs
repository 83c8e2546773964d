use crate::{
    entries::Entries,
    prelude::*,
    solution::{SearchError, Solution, TARGET},
};

/// Nested search over a working copy that loses each outer entry once it
/// has been paired with everything left.
pub fn find_triple(
    entries: &Entries,
    target: i64,
) -> Result<Solution, SearchError> {
    let mut remaining = entries.clone();

    for a in entries {
        for b in &remaining {
            if b == a {
                continue;
            }

            let third = a
                .checked_add(b)
                .filter(|&partial| partial < target)
                .and_then(|partial| remaining.complement(partial, target))
                .filter(|&c| c != a && c != b);
            if let Some(c) = third {
                return Ok(Solution::Triple([a, b, c]));
            }
        }

        remaining.remove(a);
    }

    Err(SearchError::NoTriple { target })
}

pub fn find_triple_combinations(
    entries: &Entries,
    target: i64,
) -> Result<Solution, SearchError> {
    entries
        .iter()
        .tuple_combinations()
        .filter_map(|(a, b)| a.checked_add(b).map(|sum| (a, b, sum)))
        .filter(|&(_, _, sum)| sum < target)
        .find_map(|(a, b, sum)| {
            entries
                .complement(sum, target)
                .filter(|&c| c != a && c != b)
                .map(|c| Solution::Triple([a, b, c]))
        })
        .ok_or(SearchError::NoTriple { target })
}

pub struct PartTwo;

impl Solver for PartTwo {
    type Input = Entries;
    type Output = Solution;
    type Error = SearchError;

    fn title(&self) -> &str {
        "Part 2"
    }

    fn solve(&self, input: &Entries) -> Result<Solution, SearchError> {
        find_triple(input, TARGET)
    }
}

pub struct PartTwoAlt;

impl Solver for PartTwoAlt {
    type Input = Entries;
    type Output = Solution;
    type Error = SearchError;

    fn title(&self) -> &str {
        "Part 2 Alternative"
    }

    fn solve(&self, input: &Entries) -> Result<Solution, SearchError> {
        find_triple_combinations(input, TARGET)
    }
}
