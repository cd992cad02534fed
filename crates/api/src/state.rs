use std::sync::Arc;
use tweetgram_application::BuildHistogramUseCase;

#[derive(Clone)]
pub struct AppState {
    pub build_histogram: Arc<BuildHistogramUseCase>,
}
