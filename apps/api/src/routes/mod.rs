pub mod health;
pub mod resumes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::builder::handlers as builder;
use crate::render::handlers as render;
use crate::state::AppState;
use crate::suggestions::handlers as suggestions;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analyzed resume library
        .route("/api/v1/resumes", get(resumes::handle_list))
        .route("/api/v1/resumes/:id", get(resumes::handle_get))
        .route("/api/v1/resumes/:id/file/:kind", get(resumes::handle_file))
        // Builder
        .route("/api/v1/builder/new", get(builder::handle_new))
        .route("/api/v1/builder/save", post(builder::handle_save))
        .route("/api/v1/builder/apply", post(builder::handle_apply))
        .route("/api/v1/builder/validate", post(builder::handle_validate))
        .route("/api/v1/builder/:id", get(builder::handle_load))
        // Rendering
        .route("/api/v1/render/preview", post(render::handle_preview))
        .route("/api/v1/render/html", post(render::handle_printable_html))
        .route("/api/v1/render/text", post(render::handle_plain_text))
        // Suggestions
        .route("/api/v1/suggestions", post(suggestions::handle_map_feedback))
        .route("/api/v1/suggestions/job", post(suggestions::handle_job_suggestions))
        .route(
            "/api/v1/suggestions/tier/:score",
            get(suggestions::handle_score_tier),
        )
        .with_state(state)
}
