//! Axum route handlers for the Suggestions API.

use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::feedback::Feedback;
use crate::suggestions::job_tailored::{job_tailored_suggestions, JobTailoredSuggestions};
use crate::suggestions::mapper::{map_feedback_to_sections, SectionAdviceMap};
use crate::suggestions::tiers::ScoreTier;

#[derive(Debug, Deserialize)]
pub struct MapFeedbackRequest {
    #[serde(default)]
    pub feedback: Option<Feedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSuggestionsRequest {
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TierResponse {
    pub score: i64,
    pub tier: ScoreTier,
}

/// POST /api/v1/suggestions
pub async fn handle_map_feedback(Json(req): Json<MapFeedbackRequest>) -> Json<SectionAdviceMap> {
    Json(map_feedback_to_sections(req.feedback.as_ref()))
}

/// POST /api/v1/suggestions/job
pub async fn handle_job_suggestions(
    Json(req): Json<JobSuggestionsRequest>,
) -> Json<JobTailoredSuggestions> {
    Json(job_tailored_suggestions(req.job_description.as_deref()))
}

/// GET /api/v1/suggestions/tier/:score
pub async fn handle_score_tier(Path(raw): Path<String>) -> Result<Json<TierResponse>, AppError> {
    let score: i64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("'{raw}' is not an integer score")))?;
    Ok(Json(TierResponse {
        score,
        tier: ScoreTier::classify(score),
    }))
}
