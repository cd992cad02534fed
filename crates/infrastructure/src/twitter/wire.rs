//! Wire-format types for `statuses/user_timeline.json`.

use reqwest::StatusCode;
use serde::Deserialize;
use tweetgram_domain::{DomainError, Tweet};

/// One tweet as serialized by the timeline endpoint. Only the fields the
/// histogram needs; `trim_user=true` strips most of the rest upstream.
#[derive(Debug, Deserialize)]
pub struct TimelineTweet {
    pub id: u64,
    pub created_at: String,
}

impl TimelineTweet {
    pub fn into_tweet(self) -> Result<Tweet, DomainError> {
        let created_at =
            Tweet::parse_created_at(&self.created_at).map_err(|error| {
                DomainError::UpstreamRequest {
                    message: format!("Malformed created_at `{}`: {error}", self.created_at),
                    code: 0,
                }
            })?;
        Ok(Tweet::new(self.id, created_at))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
    code: i64,
}

/// Translates a non-2xx upstream response into a domain error, preferring
/// the structured Twitter error body when one is present.
pub fn upstream_error(status: StatusCode, body: &str) -> DomainError {
    let structured = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.errors.into_iter().next());

    match structured {
        Some(entry) => DomainError::UpstreamRequest {
            message: format!("Twitter: {}", entry.message),
            code: entry.code,
        },
        None => DomainError::UpstreamRequest {
            message: format!("Twitter API returned HTTP {status}"),
            code: i64::from(status.as_u16()),
        },
    }
}
