pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::progress::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Progress API
        .route("/api/v1/progress/evaluate", post(handlers::handle_evaluate))
        .route(
            "/api/v1/progress/snapshot",
            post(handlers::handle_evaluate_snapshot),
        )
        .route(
            "/api/v1/progress/next-action",
            post(handlers::handle_next_action),
        )
        .route("/api/v1/progress/unlocks", post(handlers::handle_unlocks))
        // Onboarding wizard
        .route(
            "/api/v1/onboarding/step",
            post(handlers::handle_onboarding_step),
        )
        // Route guidance
        .route(
            "/api/v1/guidance/:route_key",
            post(handlers::handle_guidance),
        )
        .fallback(not_found)
        .with_state(state)
}
