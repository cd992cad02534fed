//! Configuration module for Tweetgram
//!
//! Configuration structures organized by concern:
//! - `root`: Main configuration, loading and CLI overrides
//! - `server`: Web server port and binding
//! - `twitter`: Upstream API credentials and paging
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod twitter;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use twitter::TwitterConfig;
