use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing Twitter credential: {0}")]
    MissingCredential(&'static str),

    #[error("Invalid page size {0}: must be between 1 and 200")]
    InvalidPageSize(u32),
}
