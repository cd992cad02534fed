//! Tweetgram Infrastructure Layer
pub mod twitter;

pub use twitter::{TwitterCredentials, TwitterTimelineFetcher};
