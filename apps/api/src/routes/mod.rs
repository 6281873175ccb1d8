pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::content::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/topics/:topic_id/article",
            post(handlers::handle_generate_article),
        )
        .route("/api/v1/articles/seo", post(handlers::handle_optimize_content))
        .with_state(state)
}
