use super::{ConfigError, LoggingConfig, ServerConfig, TwitterConfig};
use serde::{Deserialize, Serialize};
use std::fs;

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub twitter: TwitterConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over file and environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
}

impl Config {
    /// Loads configuration with the usual precedence: defaults, then the
    /// optional TOML file, then environment variables, then CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_string(),
                    source,
                })?;
                toml::from_str(&raw)?
            }
            None => Config::default(),
        };

        config.twitter.apply_env();

        if let Some(web_port) = overrides.web_port {
            config.server.web_port = web_port;
        }
        if let Some(bind_address) = overrides.bind_address {
            config.server.bind_address = bind_address;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.twitter.validate()
    }
}
