pub mod mock_fetcher;

pub use mock_fetcher::{tweet, tweet_with_offset, MockTimelineFetcher, TimelineBuilder};
