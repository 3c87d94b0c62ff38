//! Analyzed-resume library: listing, detail and the stored PDF/image files.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::builder::session::{get_analyzed_resume, list_analyzed_resumes};
use crate::errors::AppError;
use crate::models::resume::AnalyzedResume;
use crate::state::AppState;

/// GET /api/v1/resumes
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnalyzedResume>>, AppError> {
    Ok(Json(list_analyzed_resumes(state.kv.as_ref()).await?))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnalyzedResume>, AppError> {
    Ok(Json(get_analyzed_resume(state.kv.as_ref(), &id).await?))
}

/// GET /api/v1/resumes/:id/file/:kind
///
/// `kind` is `pdf` or `image`.
pub async fn handle_file(
    State(state): State<AppState>,
    Path((id, kind)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let resume = get_analyzed_resume(state.kv.as_ref(), &id).await?;
    let path = match kind.as_str() {
        "pdf" => resume.resume_path,
        "image" => resume.image_path,
        other => {
            return Err(AppError::Validation(format!(
                "File kind must be 'pdf' or 'image', got '{other}'"
            )))
        }
    };
    if path.trim().is_empty() {
        return Err(AppError::NotFound(format!("Resume {id} has no {kind} file")));
    }

    let blob = state
        .blobs
        .read(&path)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("File {path} not found")))?;

    Ok(([(header::CONTENT_TYPE, content_type_for(&path))], blob).into_response())
}

fn content_type_for(path: &str) -> &'static str {
    let ext = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
