use crate::{
    entries::Entries,
    prelude::*,
    solution::{SearchError, Solution, TARGET},
};

pub fn find_pair(entries: &Entries, target: i64) -> Result<Solution, SearchError> {
    for a in entries {
        if let Some(b) = target.checked_sub(a) {
            if b != a && entries.contains(b) {
                return Ok(Solution::Pair([a, b]));
            }
        }
    }

    Err(SearchError::NoPair { target })
}

pub fn find_pair_lazy(
    entries: &Entries,
    target: i64,
) -> Result<Solution, SearchError> {
    entries
        .iter()
        .filter_map(|a| target.checked_sub(a).map(|b| (a, b)))
        .find(|&(a, b)| a != b && entries.contains(b))
        .map(|(a, b)| Solution::Pair([a, b]))
        .ok_or(SearchError::NoPair { target })
}

pub struct PartOne;

impl Solver for PartOne {
    type Input = Entries;
    type Output = Solution;
    type Error = SearchError;

    fn title(&self) -> &str {
        "Part 1"
    }

    fn solve(&self, input: &Entries) -> Result<Solution, SearchError> {
        find_pair(input, TARGET)
    }
}

pub struct PartOneAlt;

impl Solver for PartOneAlt {
    type Input = Entries;
    type Output = Solution;
    type Error = SearchError;

    fn title(&self) -> &str {
        "Part 1 Alternative"
    }

    fn solve(&self, input: &Entries) -> Result<Solution, SearchError> {
        find_pair_lazy(input, TARGET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn example() -> Entries {
        Entries::from_reader("1721\n979\n366\n299\n675\n1456\n".as_bytes())
            .unwrap()
    }

    #[test]
    fn part_one() {
        let entries = example();
        assert_eq!(PartOne.solve(&entries), Ok(Solution::Pair([299, 1721])));
        assert_eq!(PartOne.solve(&entries).unwrap().product(), Some(514_579));
    }

    #[test]
    fn part_one_alt() {
        let entries = example();
        assert_eq!(
            PartOneAlt.solve(&entries),
            Ok(Solution::Pair([299, 1721]))
        );
    }

    #[test]
    fn no_pair_in_empty_report() {
        let entries = Entries::default();
        let expected = Err(SearchError::NoPair { target: TARGET });
        assert_eq!(PartOne.solve(&entries), expected);
        assert_eq!(PartOneAlt.solve(&entries), expected);
    }

    #[test]
    fn half_of_target_is_not_reused() {
        let entries: Entries = [1010, 3, 7].iter().copied().collect();
        assert!(find_pair(&entries, TARGET).is_err());
        assert!(find_pair_lazy(&entries, TARGET).is_err());
    }

    #[test]
    fn negative_entries() {
        let entries: Entries = [-980, 3000, 12].iter().copied().collect();
        assert_eq!(
            find_pair(&entries, TARGET),
            Ok(Solution::Pair([-980, 3000]))
        );
        assert_eq!(find_pair(&entries, TARGET), find_pair_lazy(&entries, TARGET));
    }

    #[test]
    fn extreme_entries_do_not_overflow() {
        let entries: Entries = [i64::MIN, i64::MAX, 1].iter().copied().collect();
        assert!(find_pair(&entries, TARGET).is_err());
        assert!(find_pair_lazy(&entries, TARGET).is_err());
    }

    fn brute_force(entries: &Entries) -> bool {
        entries
            .iter()
            .tuple_combinations()
            .any(|(a, b)| a + b == TARGET)
    }

    quickcheck! {
        fn pair_sums_to_target(values: Vec<u16>) -> bool {
            let entries: Entries =
                values.into_iter().map(|v| i64::from(v % 2021)).collect();

            let direct = find_pair(&entries, TARGET);
            let lazy = find_pair_lazy(&entries, TARGET);

            let valid = |found: &Result<Solution, SearchError>| match found {
                Ok(Solution::Pair([a, b])) => {
                    a != b && entries.contains(*a) && entries.contains(*b)
                        && a + b == TARGET
                },
                Ok(Solution::Triple(_)) => false,
                Err(_) => !brute_force(&entries),
            };

            valid(&direct) && valid(&lazy) && direct.is_ok() == brute_force(&entries)
                && direct == lazy
        }
    }
}
