//! OAuth 1.0a request signing (RFC 5849) for the Twitter v1.1 API.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use ring::hmac;
use std::time::{SystemTime, UNIX_EPOCH};
use tweetgram_domain::config::TwitterConfig;
use tweetgram_domain::DomainError;

/// Everything except ALPHA / DIGIT / `-` / `.` / `_` / `~` is encoded
/// (RFC 5849 §3.6).
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// The four opaque strings Twitter hands out for an application + user pair.
#[derive(Debug, Clone)]
pub struct TwitterCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl TwitterCredentials {
    /// Validates that all four credentials are present before any request
    /// can be signed.
    pub fn from_config(config: &TwitterConfig) -> Result<Self, DomainError> {
        if let Some(name) = config.missing_credential() {
            return Err(DomainError::MissingCredential(name));
        }
        Ok(Self {
            consumer_key: config.consumer_key.clone(),
            consumer_secret: config.consumer_secret.clone(),
            access_token: config.access_token.clone(),
            access_token_secret: config.access_token_secret.clone(),
        })
    }
}

/// Builds the `Authorization` header for one request, with a fresh nonce and
/// the current timestamp.
pub fn authorization_header(
    method: &str,
    url: &str,
    request_params: &[(String, String)],
    credentials: &TwitterCredentials,
) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    sign_request(method, url, request_params, credentials, &nonce(), timestamp)
}

pub(crate) fn sign_request(
    method: &str,
    url: &str,
    request_params: &[(String, String)],
    credentials: &TwitterCredentials,
    nonce: &str,
    timestamp: u64,
) -> String {
    let timestamp = timestamp.to_string();
    let oauth_params = [
        ("oauth_consumer_key", credentials.consumer_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_token", credentials.access_token.as_str()),
        ("oauth_version", "1.0"),
    ];

    // Request and protocol parameters are encoded first, then sorted by
    // encoded name and value (RFC 5849 §3.4.1.3.2).
    let mut encoded: Vec<(String, String)> = request_params
        .iter()
        .map(|(name, value)| (percent_encode(name), percent_encode(value)))
        .chain(
            oauth_params
                .iter()
                .map(|(name, value)| (percent_encode(name), percent_encode(value))),
        )
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let base_string = signature_base_string(method, url, &param_string);
    let signing_key = format!(
        "{}&{}",
        percent_encode(&credentials.consumer_secret),
        percent_encode(&credentials.access_token_secret)
    );
    let signature = hmac_sha1_base64(&signing_key, &base_string);

    let mut header_params: Vec<(&str, String)> = oauth_params
        .iter()
        .map(|(name, value)| (*name, (*value).to_string()))
        .collect();
    header_params.push(("oauth_signature", signature));
    header_params.sort_by(|a, b| a.0.cmp(b.0));

    let fields = header_params
        .iter()
        .map(|(name, value)| format!(r#"{}="{}""#, name, percent_encode(value)))
        .collect::<Vec<_>>()
        .join(", ");

    format!("OAuth {fields}")
}

pub(crate) fn signature_base_string(method: &str, url: &str, param_string: &str) -> String {
    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(param_string)
    )
}

pub(crate) fn hmac_sha1_base64(key: &str, data: &str) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, key.as_bytes());
    BASE64.encode(hmac::sign(&key, data.as_bytes()).as_ref())
}

pub(crate) fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

fn nonce() -> String {
    std::iter::repeat_with(fastrand::alphanumeric).take(32).collect()
}
