pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/ats/keywords",
            post(handlers::handle_extract_keywords),
        )
        .route("/api/v1/ats/analyze", post(handlers::handle_analyze))
        .route("/api/v1/ats/explain", post(handlers::handle_explain))
        .route(
            "/api/v1/ats/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_clear_session),
        )
        .with_state(state)
}
