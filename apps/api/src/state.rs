use std::sync::Arc;

use crate::config::Config;
use crate::store::{BlobStore, KvStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Builder documents and analyzed uploads. Redis or in-memory per `KV_BACKEND`.
    pub kv: Arc<dyn KvStore>,
    /// Uploaded PDFs and preview images. S3 or in-memory per `BLOB_BACKEND`.
    pub blobs: Arc<dyn BlobStore>,
    pub config: Config,
}
