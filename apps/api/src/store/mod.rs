// Storage boundary
// Implements: the string-valued key-value store the builder persists to and
// the file-blob store holding uploaded PDFs and their preview images.
// Both are traits carried in AppState as Arc<dyn …> so backends swap freely.

pub mod blob;
pub mod memory;
pub mod redis_kv;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub use blob::{BlobStore, S3BlobStore};
pub use memory::{MemoryBlobStore, MemoryKvStore};
pub use redis_kv::RedisKvStore;

pub const BUILT_RESUME_PREFIX: &str = "built-resume:";
pub const ANALYZED_RESUME_PREFIX: &str = "resume:";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Blob store error: {0}")]
    Blob(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KvEntry {
    pub key: String,
    /// Present only when the listing was asked to return values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Entries whose key starts with `prefix`, ordered by key.
    async fn list(&self, prefix: &str, return_values: bool) -> Result<Vec<KvEntry>, StoreError>;
}

/// Canonical form of a resume id as it appears in keys and URLs.
pub fn normalize_resume_id(raw: &str) -> &str {
    raw.trim()
}

/// `built-resume:<id>`
pub fn built_resume_key(resume_id: &str) -> String {
    format!("{BUILT_RESUME_PREFIX}{}", normalize_resume_id(resume_id))
}

/// `resume:<id>`
pub fn analyzed_resume_key(resume_id: &str) -> String {
    format!("{ANALYZED_RESUME_PREFIX}{}", normalize_resume_id(resume_id))
}

/// Key for saving a builder document. Without a resume id the current unix
/// time in milliseconds stands in.
pub fn save_key(resume_id: Option<&str>) -> String {
    match resume_id.map(normalize_resume_id).filter(|id| !id.is_empty()) {
        Some(id) => built_resume_key(id),
        None => built_resume_key(&chrono::Utc::now().timestamp_millis().to_string()),
    }
}
