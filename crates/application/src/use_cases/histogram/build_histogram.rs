use crate::ports::TimelineFetcher;
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;
use tracing::debug;
use tweetgram_domain::{parse_or_today, DomainError, Histogram, TimelineQuery};

/// Builds a tweets-per-hour histogram for one user and one calendar day.
///
/// Walks the timeline backwards page by page and stops at the first tweet
/// older than the target day; upstream guarantees descending `created_at`
/// order, so nothing older can qualify.
pub struct BuildHistogramUseCase {
    fetcher: Arc<dyn TimelineFetcher>,
    page_size: u32,
}

impl BuildHistogramUseCase {
    pub fn new(fetcher: Arc<dyn TimelineFetcher>, page_size: u32) -> Self {
        Self { fetcher, page_size }
    }

    pub async fn execute(
        &self,
        screen_name: &str,
        date_input: Option<&str>,
    ) -> Result<Histogram, DomainError> {
        let target = parse_or_today(date_input);

        let mut histogram = Histogram::new();
        let mut max_id: Option<u64> = None;
        let mut previous: Option<DateTime<FixedOffset>> = None;
        let mut pages = 0u32;

        loop {
            let mut query = TimelineQuery::first_page(screen_name, self.page_size);
            if let Some(id) = max_id {
                query = query.with_max_id(id);
            }

            let batch = self.fetcher.fetch(&query).await?;
            pages += 1;
            if batch.is_empty() {
                break;
            }

            let mut halted = false;
            let mut last_examined = None;
            for tweet in &batch {
                debug_assert!(
                    previous.is_none_or(|prev| tweet.created_at <= prev),
                    "timeline violated descending created_at order at tweet {}",
                    tweet.id
                );
                previous = Some(tweet.created_at);
                last_examined = Some(tweet.id);

                let day = tweet.local_date();
                if day > target {
                    continue;
                }
                if day == target {
                    histogram.record(tweet.local_hour());
                } else {
                    // Everything after this tweet is older still.
                    halted = true;
                    break;
                }
            }

            // The next page must exclude everything already examined,
            // including the tweet the scan halted on; deriving the cursor
            // from the last examined id keeps a qualifying run that spans a
            // page boundary from being lost or double-counted.
            max_id = last_examined.map(|id| id.saturating_sub(1));
            if halted {
                break;
            }
        }

        debug!(
            screen_name,
            target = %target,
            pages,
            tweets = histogram.total(),
            "Histogram built"
        );

        Ok(histogram)
    }
}
