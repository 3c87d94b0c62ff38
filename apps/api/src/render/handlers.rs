//! Axum route handlers for the Render API.

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::render::html::{render_printable_html, PRINT_SETTLE_DELAY};
use crate::render::layout::TemplateId;
use crate::render::plain_text::render_plain_text;
use crate::render::tree::{render, RenderTree};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub data: ResumeData,
    /// Raw template name; unknown names render as modern.
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintableExport {
    pub html: String,
    /// The host waits this long after loading the document before printing.
    pub print_delay_ms: u64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/render/preview
pub async fn handle_preview(Json(req): Json<PreviewRequest>) -> Json<RenderTree> {
    let template = req
        .template
        .as_deref()
        .map(TemplateId::parse)
        .unwrap_or_default();
    tracing::debug!("Rendering preview with the {} template", template.as_str());
    Json(render(&req.data, template))
}

/// POST /api/v1/render/html
pub async fn handle_printable_html(
    Json(data): Json<ResumeData>,
) -> Result<Json<PrintableExport>, AppError> {
    let html = render_printable_html(&data)?;
    tracing::info!("Rendered printable export ({} bytes)", html.len());
    Ok(Json(PrintableExport {
        html,
        print_delay_ms: PRINT_SETTLE_DELAY.as_millis() as u64,
    }))
}

/// POST /api/v1/render/text
pub async fn handle_plain_text(Json(data): Json<ResumeData>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_plain_text(&data),
    )
        .into_response()
}
