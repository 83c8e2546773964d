use crate::prelude::*;
use std::{collections::btree_set, iter::Copied};

/// Every distinct entry of an expense report, in ascending order.
///
/// Duplicate lines collapse into a single entry, so a value that appears
/// twice in the report can still only be used once in a sum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entries(BTreeSet<i64>);

impl Entries {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let reader = file_reader(path)?;
        Self::from_reader(reader)
    }

    pub fn from_reader<R: io::Read>(r: R) -> Result<Self, InputError> {
        parse_to::<_, i64, _>(r).map(Entries)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.0.contains(&value)
    }

    pub fn remove(&mut self, value: i64) -> bool {
        self.0.remove(&value)
    }

    #[must_use]
    pub fn iter(&self) -> Copied<btree_set::Iter<'_, i64>> {
        self.0.iter().copied()
    }

    /// The entry that brings `partial` up to `target`, if there is one.
    #[must_use]
    pub fn complement(&self, partial: i64, target: i64) -> Option<i64> {
        target
            .checked_sub(partial)
            .filter(|&needed| self.contains(needed))
    }
}

impl<'a> IntoIterator for &'a Entries {
    type Item = i64;
    type IntoIter = Copied<btree_set::Iter<'a, i64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<i64> for Entries {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Entries(iter.into_iter().collect())
    }
}
