pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailoring::handlers;

async fn not_found() -> AppError {
    AppError::NotFound("No route matches this path".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Text analysis
        .route("/api/v1/match-score", post(handlers::handle_match_score))
        .route("/api/v1/keywords", post(handlers::handle_keywords))
        .route("/api/v1/cleanup", post(handlers::handle_cleanup))
        // Tailoring (LLM)
        .route("/api/v1/tailor", post(handlers::handle_tailor))
        .fallback(not_found)
        .with_state(state)
}
