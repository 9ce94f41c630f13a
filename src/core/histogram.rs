//! MAPQ histograms.
//!
//! A [`FrequencyTable`] counts mapped records per exact mapping quality. It is
//! folded into a [`CumulativeTable`], where each MAPQ maps to the number of
//! records with a mapping quality greater than or equal to it.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Count of mapped records per exact mapping quality
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u64, u64>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of `mapq`
    pub fn increment(&mut self, mapq: u64) {
        *self.counts.entry(mapq).or_insert(0) += 1;
    }

    #[must_use]
    pub fn get(&self, mapq: u64) -> u64 {
        self.counts.get(&mapq).copied().unwrap_or(0)
    }

    /// Total number of observations
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct mapping qualities observed
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(mapq, count)` in ascending MAPQ order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u64, u64)> + '_ {
        self.counts.iter().map(|(&mapq, &count)| (mapq, count))
    }

    /// Fold into a cumulative-from-the-top distribution.
    ///
    /// Distinct MAPQs are walked in descending order with a running total, so
    /// `cumulative[s]` is the sum of `frequency[s']` for every `s' >= s`.
    #[must_use]
    pub fn to_cumulative(&self) -> CumulativeTable {
        let mut counts = BTreeMap::new();
        let mut total = 0u64;

        for (mapq, count) in self.iter().rev() {
            total += count;
            counts.insert(mapq, total);
        }

        CumulativeTable { counts }
    }
}

/// One row of the cumulative MAPQ summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativeRow {
    pub mapq: u64,
    pub cumulative_count: u64,
}

/// Number of mapped records with mapping quality >= each observed MAPQ.
///
/// Values are non-increasing as MAPQ increases. The lowest MAPQ holds the total
/// number of mapped records and the highest holds its own frequency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CumulativeTable {
    counts: BTreeMap<u64, u64>,
}

impl CumulativeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-cumulative rows, e.g. when reading a summary back.
    /// Later rows with the same MAPQ replace earlier ones.
    pub fn from_rows(rows: impl IntoIterator<Item = CumulativeRow>) -> Self {
        let counts = rows
            .into_iter()
            .map(|row| (row.mapq, row.cumulative_count))
            .collect();
        Self { counts }
    }

    #[must_use]
    pub fn get(&self, mapq: u64) -> Option<u64> {
        self.counts.get(&mapq).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total mapped records, i.e. the value at the lowest MAPQ
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().next().copied().unwrap_or(0)
    }

    /// Iterate rows in ascending MAPQ order
    pub fn rows(&self) -> impl Iterator<Item = CumulativeRow> + '_ {
        self.counts.iter().map(|(&mapq, &cumulative_count)| CumulativeRow {
            mapq,
            cumulative_count,
        })
    }

    /// Check that values never increase as MAPQ increases
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.counts
            .values()
            .zip(self.counts.values().skip(1))
            .all(|(lower, higher)| lower >= higher)
    }
}

impl Serialize for CumulativeTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}
