pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::export::handlers as export;
use crate::monetizer::handlers as monetizer;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.body_limit_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Skill Monetizer
        .route("/api/v1/monetize", post(monetizer::handle_monetize))
        .route("/api/v1/monetize/skills", post(monetizer::handle_edit_skills))
        .route(
            "/api/v1/monetize/categories",
            get(monetizer::handle_categories),
        )
        // Extraction exports
        .route(
            "/api/v1/export/records/csv",
            post(export::handle_records_csv),
        )
        .route(
            "/api/v1/export/records/json",
            post(export::handle_records_json),
        )
        .route("/api/v1/export/record/:format", post(export::handle_record))
        // Idea validator exports
        .route("/api/v1/export/idea/json", post(export::handle_idea_json))
        .route(
            "/api/v1/export/idea/markdown",
            post(export::handle_idea_markdown),
        )
        .route(
            "/api/v1/export/idea/scorecard",
            post(export::handle_idea_scorecard),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
