//! Most recent merge per package.

use chrono::NaiveDateTime;
use indexmap::IndexMap;

use super::filter::ResolvedMerge;

/// Latest known merge time per `category/package` key.
///
/// An entry only moves forward in time, so the result does not depend on
/// the order of the log. Keys keep the order in which they first appeared.
#[derive(Debug, Default, Clone)]
pub struct PackageRecency {
    entries: IndexMap<String, NaiveDateTime>,
}

impl PackageRecency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a merge of `key` at `timestamp`.
    pub fn record(&mut self, key: impl Into<String>, timestamp: NaiveDateTime) {
        self.entries
            .entry(key.into())
            .and_modify(|latest| {
                if timestamp >= *latest {
                    *latest = timestamp;
                }
            })
            .or_insert(timestamp);
    }

    #[allow(dead_code)] // used in tests
    pub fn get(&self, key: &str) -> Option<NaiveDateTime> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)] // used in tests
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered oldest first. Equal timestamps keep first-seen order.
    pub fn sorted(&self) -> Vec<(&str, NaiveDateTime)> {
        let mut sorted: Vec<_> = self
            .entries
            .iter()
            .map(|(key, ts)| (key.as_str(), *ts))
            .collect();
        sorted.sort_by_key(|(_, ts)| *ts);
        sorted
    }
}

impl FromIterator<ResolvedMerge> for PackageRecency {
    fn from_iter<I: IntoIterator<Item = ResolvedMerge>>(iter: I) -> Self {
        let mut recency = Self::new();
        for merge in iter {
            recency.record(merge.key, merge.timestamp);
        }
        recency
    }
}
