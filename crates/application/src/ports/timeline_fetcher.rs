use async_trait::async_trait;
use tweetgram_domain::{DomainError, TimelineQuery, Tweet};

/// Capability to fetch one page of a user's timeline.
///
/// Implementations return the batch in upstream order (sorted by `created_at`
/// descending, newest first) without re-sorting; an empty batch means no more
/// history is available. Credential problems surface as
/// `DomainError::MissingCredential`, everything else as
/// `DomainError::UpstreamRequest`.
#[async_trait]
pub trait TimelineFetcher: Send + Sync {
    async fn fetch(&self, query: &TimelineQuery) -> Result<Vec<Tweet>, DomainError>;
}
