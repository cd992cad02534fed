use tracing::info;
use tweetgram_domain::{CliOverrides, Config};

/// Loads configuration from the optional file, environment and CLI
/// overrides. Validation is deferred until logging is up so that the
/// outcome can be reported.
pub fn load_config(config_path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    Ok(Config::load(config_path, cli_overrides)?)
}

pub fn validate_config(config: &Config, config_path: Option<&str>) -> anyhow::Result<()> {
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        page_size = config.twitter.page_size,
        "Configuration loaded"
    );

    Ok(())
}
