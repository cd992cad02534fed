pub mod client;
pub mod oauth;
pub mod wire;

pub use client::TwitterTimelineFetcher;
pub use oauth::TwitterCredentials;
