pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::tailoring::handlers;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Path kept as-is for existing clients.
        .route("/process_resumee", post(handlers::handle_process_resume))
        .route(
            "/api/v1/experience/tailor",
            post(handlers::handle_process_resume),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
