#![allow(dead_code)]

use async_trait::async_trait;
use chrono::DateTime;
use std::sync::Arc;
use tokio::sync::RwLock;
use tweetgram_application::ports::TimelineFetcher;
use tweetgram_domain::{DomainError, TimelineQuery, Tweet};

// ============================================================================
// Mock TimelineFetcher
// ============================================================================

/// Timeline-backed fetcher double.
///
/// Holds a full reverse-chronological timeline and serves pages by slicing it
/// with the query's `max_id` and `page_size`, the way the upstream endpoint
/// does. A wrong cursor in the caller shows up as duplicated or missing
/// tweets, not just a wrong call count.
#[derive(Clone)]
pub struct MockTimelineFetcher {
    timeline: Arc<RwLock<Vec<Tweet>>>,
    calls: Arc<RwLock<Vec<TimelineQuery>>>,
    failure: Arc<RwLock<Option<DomainError>>>,
}

impl MockTimelineFetcher {
    pub fn new() -> Self {
        Self {
            timeline: Arc::new(RwLock::new(Vec::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
            failure: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a mock already populated with a timeline (newest first).
    pub fn with_timeline(tweets: Vec<Tweet>) -> Self {
        let mock = Self::new();
        *mock.timeline.try_write().expect("fresh lock") = tweets;
        mock
    }

    /// Makes every subsequent fetch fail with the given error.
    pub async fn set_failure(&self, error: DomainError) {
        *self.failure.write().await = Some(error);
    }

    /// Queries received so far, in order.
    pub async fn calls(&self) -> Vec<TimelineQuery> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

impl Default for MockTimelineFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimelineFetcher for MockTimelineFetcher {
    async fn fetch(&self, query: &TimelineQuery) -> Result<Vec<Tweet>, DomainError> {
        self.calls.write().await.push(query.clone());

        if let Some(error) = self.failure.read().await.clone() {
            return Err(error);
        }

        let timeline = self.timeline.read().await;
        Ok(timeline
            .iter()
            .filter(|tweet| query.max_id.is_none_or(|max| tweet.id <= max))
            .take(query.page_size as usize)
            .cloned()
            .collect())
    }
}

// ============================================================================
// Helper Builders
// ============================================================================

/// Tweet from a `YYYY-MM-DD HH:MM:SS` timestamp, assumed UTC.
pub fn tweet(id: u64, timestamp: &str) -> Tweet {
    tweet_with_offset(id, timestamp, "+0000")
}

/// Tweet from a `YYYY-MM-DD HH:MM:SS` timestamp with an explicit offset.
pub fn tweet_with_offset(id: u64, timestamp: &str, offset: &str) -> Tweet {
    let created_at = DateTime::parse_from_str(
        &format!("{timestamp} {offset}"),
        "%Y-%m-%d %H:%M:%S %z",
    )
    .expect("valid test timestamp");
    Tweet::new(id, created_at)
}

/// Builds a reverse-chronological timeline with strictly decreasing ids,
/// mirroring how upstream assigns them.
pub struct TimelineBuilder {
    next_id: u64,
    tweets: Vec<Tweet>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::starting_at(900_000_000_000)
    }

    pub fn starting_at(first_id: u64) -> Self {
        Self {
            next_id: first_id,
            tweets: Vec::new(),
        }
    }

    pub fn push(mut self, timestamp: &str) -> Self {
        let id = self.next_id;
        self.next_id -= 1;
        self.tweets.push(tweet(id, timestamp));
        self
    }

    pub fn repeat(mut self, count: usize, timestamp: &str) -> Self {
        for _ in 0..count {
            self = self.push(timestamp);
        }
        self
    }

    /// Id that was assigned to the `position`-th tweet (1-based).
    pub fn id_at(&self, position: usize) -> u64 {
        self.tweets[position - 1].id
    }

    pub fn build(self) -> Vec<Tweet> {
        self.tweets
    }
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
