use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use tracing::debug;

use crate::store::StoreError;

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Reads the blob at `path`. A missing object is `Ok(None)`.
    async fn read(&self, path: &str) -> Result<Option<Bytes>, StoreError>;
}

/// S3 / MinIO backed [`BlobStore`]. Paths map to object keys with any leading
/// `/` removed.
#[derive(Clone)]
pub struct S3BlobStore {
    client: S3Client,
    bucket: String,
}

impl S3BlobStore {
    pub fn new(client: S3Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

fn object_key(path: &str) -> &str {
    path.trim_start_matches('/')
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn read(&self, path: &str) -> Result<Option<Bytes>, StoreError> {
        let key = object_key(path);
        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(err) => {
                if err.as_service_error().map(|e| e.is_no_such_key()) == Some(true) {
                    debug!("No object at s3://{}/{}", self.bucket, key);
                    return Ok(None);
                }
                return Err(StoreError::Blob(format!("S3 read failed: {err}")));
            }
        };

        let body = output
            .body
            .collect()
            .await
            .map_err(|e| StoreError::Blob(format!("S3 body read failed: {e}")))?;
        Ok(Some(body.into_bytes()))
    }
}
