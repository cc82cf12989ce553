pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::ai::handlers as ai_handlers;
use crate::analysis::handlers as analysis_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/api/analyze-resume",
            post(analysis_handlers::handle_analyze_resume),
        )
        .route(
            "/api/analyze-document",
            post(ai_handlers::handle_analyze_document),
        )
        .route(
            "/api/generate-interview-questions",
            post(analysis_handlers::handle_interview_questions),
        )
        .route(
            "/api/analyze-salary",
            post(analysis_handlers::handle_analyze_salary),
        )
        .route(
            "/api/generate-cover-letter",
            post(ai_handlers::handle_generate_cover_letter),
        )
        .with_state(state)
}
