use super::{oauth, wire, TwitterCredentials};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;
use tracing::debug;
use tweetgram_application::ports::TimelineFetcher;
use tweetgram_domain::config::TwitterConfig;
use tweetgram_domain::{DomainError, TimelineQuery, Tweet};

const USER_TIMELINE_ENDPOINT: &str = "statuses/user_timeline.json";

/// Timeline fetcher backed by the Twitter v1.1 REST API.
///
/// Owns the OAuth credentials and the pooled HTTP client; all pages of all
/// requests go through the same connection pool.
#[derive(Debug)]
pub struct TwitterTimelineFetcher {
    http: reqwest::Client,
    timeline_url: String,
    credentials: TwitterCredentials,
    last_status: AtomicU16,
}

impl TwitterTimelineFetcher {
    /// Fails with `MissingCredential` before any network call if the
    /// configuration is incomplete.
    pub fn new(config: &TwitterConfig) -> Result<Self, DomainError> {
        let credentials = TwitterCredentials::from_config(config)?;

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(4)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Ok(Self {
            http,
            timeline_url: format!(
                "{}/{}",
                config.base_url.trim_end_matches('/'),
                USER_TIMELINE_ENDPOINT
            ),
            credentials,
            last_status: AtomicU16::new(0),
        })
    }

    /// Numeric HTTP status of the most recent upstream call, for diagnostics.
    pub fn last_status(&self) -> Option<u16> {
        match self.last_status.load(Ordering::Relaxed) {
            0 => None,
            status => Some(status),
        }
    }
}

#[async_trait]
impl TimelineFetcher for TwitterTimelineFetcher {
    async fn fetch(&self, query: &TimelineQuery) -> Result<Vec<Tweet>, DomainError> {
        let mut params = vec![
            ("screen_name".to_string(), query.screen_name.clone()),
            ("trim_user".to_string(), "true".to_string()),
            ("exclude_replies".to_string(), "true".to_string()),
            ("count".to_string(), query.page_size.to_string()),
        ];
        if let Some(max_id) = query.max_id {
            params.push(("max_id".to_string(), max_id.to_string()));
        }

        let authorization =
            oauth::authorization_header("GET", &self.timeline_url, &params, &self.credentials);

        debug!(
            screen_name = %query.screen_name,
            max_id = ?query.max_id,
            count = query.page_size,
            "Fetching user timeline page"
        );

        let response = self
            .http
            .get(&self.timeline_url)
            .query(&params)
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(|error| DomainError::UpstreamRequest {
                message: format!("Twitter request failed: {error}"),
                code: error
                    .status()
                    .map(|status| i64::from(status.as_u16()))
                    .unwrap_or(0),
            })?;

        let status = response.status();
        self.last_status.store(status.as_u16(), Ordering::Relaxed);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(wire::upstream_error(status, &body));
        }

        let page: Vec<wire::TimelineTweet> =
            response
                .json()
                .await
                .map_err(|error| DomainError::UpstreamRequest {
                    message: format!("Malformed timeline response: {error}"),
                    code: 0,
                })?;

        debug!(
            tweets = page.len(),
            status = status.as_u16(),
            "Timeline page received"
        );

        page.into_iter().map(wire::TimelineTweet::into_tweet).collect()
    }
}
