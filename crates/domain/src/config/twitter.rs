use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Upstream Twitter API configuration.
///
/// All four OAuth credentials are required before any request can be signed.
/// Each field can be supplied in the config file or overridden by its
/// environment variable (`TWITTER_ACCESS_TOKEN` etc.).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TwitterConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Tweets requested per timeline page (upstream accepts 1-200).
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default)]
    pub access_token: String,

    #[serde(default)]
    pub access_token_secret: String,

    #[serde(default)]
    pub consumer_key: String,

    #[serde(default)]
    pub consumer_secret: String,
}

fn default_base_url() -> String {
    "https://api.twitter.com/1.1".to_string()
}

fn default_page_size() -> u32 {
    100
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            access_token: String::new(),
            access_token_secret: String::new(),
            consumer_key: String::new(),
            consumer_secret: String::new(),
        }
    }
}

impl TwitterConfig {
    /// Applies environment overrides for credentials and page size.
    pub fn apply_env(&mut self) {
        let overrides = [
            ("TWITTER_ACCESS_TOKEN", &mut self.access_token),
            ("TWITTER_ACCESS_TOKEN_SECRET", &mut self.access_token_secret),
            ("TWITTER_CONSUMER_KEY", &mut self.consumer_key),
            ("TWITTER_CONSUMER_SECRET", &mut self.consumer_secret),
        ];
        for (var, field) in overrides {
            if let Ok(value) = std::env::var(var) {
                if !value.is_empty() {
                    *field = value;
                }
            }
        }

        if let Some(limit) = std::env::var("TWEET_BATCH_LIMIT")
            .ok()
            .and_then(|raw| raw.parse().ok())
        {
            self.page_size = limit;
        }
    }

    /// Name of the first missing credential, if any.
    pub fn missing_credential(&self) -> Option<&'static str> {
        let required = [
            ("access_token", &self.access_token),
            ("access_token_secret", &self.access_token_secret),
            ("consumer_key", &self.consumer_key),
            ("consumer_secret", &self.consumer_secret),
        ];
        required
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = self.missing_credential() {
            return Err(ConfigError::MissingCredential(name));
        }
        if self.page_size == 0 || self.page_size > 200 {
            return Err(ConfigError::InvalidPageSize(self.page_size));
        }
        Ok(())
    }
}
