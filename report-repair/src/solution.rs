use crate::prelude::*;
use thiserror::Error;

pub const TARGET: i64 = 2020;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no two entries sum to {target}")]
    NoPair { target: i64 },
    #[error("no three entries sum to {target}")]
    NoTriple { target: i64 },
}

/// Distinct entries whose sum is the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solution {
    Pair([i64; 2]),
    Triple([i64; 3]),
}

impl Solution {
    #[must_use]
    pub fn values(&self) -> &[i64] {
        match self {
            Solution::Pair(values) => &values[..],
            Solution::Triple(values) => &values[..],
        }
    }

    #[must_use]
    pub fn sum(&self) -> i64 {
        self.values().iter().sum()
    }

    /// `None` if the product does not fit in an `i128`.
    #[must_use]
    pub fn product(&self) -> Option<i128> {
        self.values()
            .iter()
            .try_fold(1_i128, |acc, &v| acc.checked_mul(i128::from(v)))
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Pair([a, b]) => writeln!(f, "Values: {a} and {b}")?,
            Solution::Triple(values) => {
                writeln!(f, "Values: {}", values.iter().join(", "))?;
            },
        }
        match self.product() {
            Some(answer) => write!(f, "Answer: {answer}"),
            None => write!(f, "Answer: out of range"),
        }
    }
}
