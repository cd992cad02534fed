use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing Twitter credential: {0}")]
    MissingCredential(&'static str),

    #[error("{message}")]
    UpstreamRequest { message: String, code: i64 },
}

impl DomainError {
    /// Numeric code rendered in the API error body. Upstream errors carry
    /// Twitter's own error code or the HTTP status; everything else is 0.
    pub fn code(&self) -> i64 {
        match self {
            DomainError::UpstreamRequest { code, .. } => *code,
            DomainError::MissingCredential(_) => 0,
        }
    }
}
