use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::give_hint))
        .route("/hello/{name}", get(handlers::say_hello))
        .route("/histogram/{username}", get(handlers::get_histogram))
        .with_state(state)
}
