use serde::Serialize;
use std::collections::BTreeMap;

/// Tweets-per-hour counts for a single calendar day.
///
/// Hours with no tweets are absent rather than stored as zero, so the sum of
/// all values always equals the number of tweets counted. Serializes as a
/// JSON object keyed by hour (`{}` when empty, never `[]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Histogram(BTreeMap<u32, u64>);

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one tweet in the given hour bucket (0-23).
    pub fn record(&mut self, hour: u32) {
        debug_assert!(hour < 24, "hour-of-day out of range: {hour}");
        *self.0.entry(hour).or_insert(0) += 1;
    }

    pub fn count(&self, hour: u32) -> u64 {
        self.0.get(&hour).copied().unwrap_or(0)
    }

    /// Total number of tweets across all hour buckets.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.0.iter().map(|(hour, count)| (*hour, *count))
    }
}
