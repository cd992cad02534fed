#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::DateTime;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;
use tweetgram_api::{create_api_routes, AppState};
use tweetgram_application::ports::TimelineFetcher;
use tweetgram_application::BuildHistogramUseCase;
use tweetgram_domain::{DomainError, TimelineQuery, Tweet};

/// Scripted fetcher double: serves queued batches in order, then empty
/// pages, without network access.
#[derive(Clone, Default)]
pub struct ScriptedTimelineFetcher {
    batches: Arc<RwLock<VecDeque<Vec<Tweet>>>>,
    failure: Arc<RwLock<Option<DomainError>>>,
}

impl ScriptedTimelineFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batches(batches: Vec<Vec<Tweet>>) -> Self {
        let fetcher = Self::new();
        *fetcher.batches.try_write().expect("fresh lock") = batches.into();
        fetcher
    }

    pub fn failing_with(error: DomainError) -> Self {
        let fetcher = Self::new();
        *fetcher.failure.try_write().expect("fresh lock") = Some(error);
        fetcher
    }
}

#[async_trait]
impl TimelineFetcher for ScriptedTimelineFetcher {
    async fn fetch(&self, _query: &TimelineQuery) -> Result<Vec<Tweet>, DomainError> {
        if let Some(error) = self.failure.read().await.clone() {
            return Err(error);
        }
        Ok(self.batches.write().await.pop_front().unwrap_or_default())
    }
}

/// Router wired exactly as in production, with the fetcher swapped out.
pub fn app(fetcher: ScriptedTimelineFetcher) -> Router {
    let build_histogram = Arc::new(BuildHistogramUseCase::new(Arc::new(fetcher), 100));
    create_api_routes(AppState { build_histogram })
}

/// Tweet from a `YYYY-MM-DD HH:MM:SS` UTC timestamp.
pub fn tweet(id: u64, timestamp: &str) -> Tweet {
    let created_at =
        DateTime::parse_from_str(&format!("{timestamp} +0000"), "%Y-%m-%d %H:%M:%S %z")
            .expect("valid test timestamp");
    Tweet::new(id, created_at)
}
