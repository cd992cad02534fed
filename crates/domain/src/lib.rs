//! Tweetgram Domain Layer
pub mod config;
pub mod errors;
pub mod histogram;
pub mod target_date;
pub mod timeline;
pub mod tweet;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use histogram::Histogram;
pub use target_date::parse_or_today;
pub use timeline::TimelineQuery;
pub use tweet::Tweet;
