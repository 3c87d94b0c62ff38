use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::config::{BlobBackend, KvBackend};
use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and storage backends.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let kv = match state.config.kv_backend {
        KvBackend::Redis => "redis",
        KvBackend::Memory => "memory",
    };
    let blobs = match state.config.blob_backend {
        BlobBackend::S3 => "s3",
        BlobBackend::Memory => "memory",
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-builder-api",
        "storage": { "kv": kv, "blobs": blobs }
    }))
}
