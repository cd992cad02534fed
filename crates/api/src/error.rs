use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tweetgram_domain::DomainError;

/// JSON body returned for failed requests.
#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
    pub code: i64,
}

/// Domain failure rendered at the HTTP boundary.
///
/// All upstream failures are reported as 400, never 5xx; they are treated as
/// client-addressable.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.0.to_string(),
            code: self.0.code(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
