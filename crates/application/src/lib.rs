//! Tweetgram Application Layer
pub mod ports;
pub mod use_cases;

pub use ports::TimelineFetcher;
pub use use_cases::BuildHistogramUseCase;
