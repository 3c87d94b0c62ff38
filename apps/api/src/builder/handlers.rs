//! Axum route handlers for the Builder API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::builder::mutations::{apply, ResumeAction};
use crate::builder::session::{load_builder, save_builder, BuilderSession};
use crate::builder::validation::{validate, ValidationReport};
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    #[serde(default)]
    pub resume_id: Option<String>,
    pub data: ResumeData,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub key: String,
}

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub data: ResumeData,
    pub action: ResumeAction,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/builder/new
pub async fn handle_new() -> Json<ResumeData> {
    Json(ResumeData::default())
}

/// GET /api/v1/builder/:id
pub async fn handle_load(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<BuilderSession> {
    Json(load_builder(state.kv.as_ref(), &id).await)
}

/// POST /api/v1/builder/save
pub async fn handle_save(
    State(state): State<AppState>,
    Json(req): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, AppError> {
    let key = save_builder(state.kv.as_ref(), req.resume_id.as_deref(), &req.data).await?;
    Ok(Json(SaveResponse { key }))
}

/// POST /api/v1/builder/apply
pub async fn handle_apply(Json(req): Json<ApplyRequest>) -> Json<ResumeData> {
    Json(apply(&req.data, req.action))
}

/// POST /api/v1/builder/validate
pub async fn handle_validate(Json(data): Json<ResumeData>) -> Json<ValidationReport> {
    Json(validate(&data))
}
