use crate::{dto::HistogramResponse, error::ApiError, state::AppState};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::{debug, error, instrument};

#[derive(Debug, Deserialize)]
pub struct HistogramParams {
    pub date: Option<String>,
}

#[instrument(skip(state), name = "api_get_histogram")]
pub async fn get_histogram(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(params): Query<HistogramParams>,
) -> Result<Json<HistogramResponse>, ApiError> {
    debug!(
        username = %username,
        date = params.date.as_deref().unwrap_or("today"),
        "Building tweet histogram"
    );

    let histogram = state
        .build_histogram
        .execute(&username, params.date.as_deref())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to build histogram");
            ApiError::from(e)
        })?;

    debug!(
        hours = histogram.iter().count(),
        tweets = histogram.total(),
        "Histogram built successfully"
    );

    Ok(Json(HistogramResponse::from(histogram)))
}
