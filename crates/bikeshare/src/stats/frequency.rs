//! Value counts with a stable ranking and pluggable mode selection.

use std::borrow::Borrow;
use std::hash::Hash;

use indexmap::IndexMap;

/// Counts of each distinct value, kept in first-seen order.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K: Hash + Eq> {
    counts: IndexMap<K, usize>,
    total: usize,
}

impl<K: Hash + Eq> FrequencyTable<K> {
    pub fn new() -> Self {
        Self {
            counts: IndexMap::new(),
            total: 0,
        }
    }

    /// Count one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        self.add_count(key, 1);
    }

    /// Count `n` occurrences of `key`.
    pub fn add_count(&mut self, key: K, n: usize) {
        *self.counts.entry(key).or_insert(0) += n;
        self.total += n;
    }

    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Values by descending count. Equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(&K, usize)> {
        let mut ranked: Vec<(&K, usize)> = self.counts.iter().map(|(k, &c)| (k, c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Most frequent value, first-seen among ties.
    pub fn mode(&self) -> Option<(&K, usize)> {
        self.mode_by(&MostFrequent)
    }

    /// Mode chosen by `rule` from the ranking.
    pub fn mode_by<R: ModeRule<K> + ?Sized>(&self, rule: &R) -> Option<(&K, usize)> {
        rule.pick(&self.ranked())
    }

    /// Share of the total that `count` represents.
    pub fn share(&self, count: usize) -> Share {
        Share {
            count,
            total: self.total,
        }
    }
}

impl<K: Hash + Eq> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.add(key);
        }
        table
    }
}

/// Picks a representative value from a ranking.
pub trait ModeRule<K> {
    fn pick<'a>(&self, ranked: &[(&'a K, usize)]) -> Option<(&'a K, usize)>;
}

/// Top of the ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostFrequent;

impl<K> ModeRule<K> for MostFrequent {
    fn pick<'a>(&self, ranked: &[(&'a K, usize)]) -> Option<(&'a K, usize)> {
        ranked.first().copied()
    }
}

/// Smallest value among those tied for the top count.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallestTied;

impl<K: Ord> ModeRule<K> for SmallestTied {
    fn pick<'a>(&self, ranked: &[(&'a K, usize)]) -> Option<(&'a K, usize)> {
        let top = ranked.first()?.1;
        ranked
            .iter()
            .take_while(|(_, count)| *count == top)
            .min_by_key(|&&(key, _)| key)
            .copied()
    }
}

/// Top of the ranking, unless it is the sentinel and some other value
/// exists, in which case the runner-up.
#[derive(Debug, Clone, Copy)]
pub struct SkipSentinel<'s>(pub &'s str);

impl<K: Borrow<str>> ModeRule<K> for SkipSentinel<'_> {
    fn pick<'a>(&self, ranked: &[(&'a K, usize)]) -> Option<(&'a K, usize)> {
        match ranked {
            [(top, _), next, ..] if Borrow::<str>::borrow(*top) == self.0 => Some(*next),
            _ => ranked.first().copied(),
        }
    }
}

/// A count relative to a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Share {
    pub count: usize,
    pub total: usize,
}

impl Share {
    /// Percentage of the total, `0.0` for an empty total.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count as f64 / self.total as f64 * 100.0
        }
    }
}
