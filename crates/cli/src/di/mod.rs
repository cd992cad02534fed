use std::sync::Arc;
use tweetgram_api::AppState;
use tweetgram_application::BuildHistogramUseCase;
use tweetgram_domain::Config;
use tweetgram_infrastructure::TwitterTimelineFetcher;

/// Wires the concrete Twitter adapter into the application use cases.
pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let fetcher = Arc::new(TwitterTimelineFetcher::new(&config.twitter)?);
    let build_histogram = Arc::new(BuildHistogramUseCase::new(
        fetcher,
        config.twitter.page_size,
    ));

    Ok(AppState { build_histogram })
}
