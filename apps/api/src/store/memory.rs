//! In-process backends for local runs and tests.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::store::{BlobStore, KvEntry, KvStore, StoreError};

#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn list(&self, prefix: &str, return_values: bool) -> Result<Vec<KvEntry>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| KvEntry {
                key: key.clone(),
                value: return_values.then(|| value.clone()),
            })
            .collect())
    }
}

#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, Bytes>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn insert(&self, path: &str, data: impl Into<Bytes>) {
        self.blobs
            .write()
            .await
            .insert(path.to_string(), data.into());
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn read(&self, path: &str) -> Result<Option<Bytes>, StoreError> {
        Ok(self.blobs.read().await.get(path).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_set() {
        let kv = MemoryKvStore::new();
        assert_eq!(kv.get("a").await.unwrap(), None);
        kv.set("a", "1").await.unwrap();
        kv.set("a", "2").await.unwrap();
        assert_eq!(kv.get("a").await.unwrap(), Some("2".to_string()));
    }

    #[tokio::test]
    async fn test_list_by_prefix() {
        let kv = MemoryKvStore::new();
        kv.set("resume:2", "b").await.unwrap();
        kv.set("resume:1", "a").await.unwrap();
        kv.set("built-resume:1", "x").await.unwrap();
        kv.set("resumes", "nope").await.unwrap();

        let listed = kv.list("resume:", true).await.unwrap();
        assert_eq!(
            listed,
            vec![
                KvEntry {
                    key: "resume:1".into(),
                    value: Some("a".into())
                },
                KvEntry {
                    key: "resume:2".into(),
                    value: Some("b".into())
                },
            ]
        );

        let keys_only = kv.list("resume:", false).await.unwrap();
        assert!(keys_only.iter().all(|e| e.value.is_none()));
    }

    #[tokio::test]
    async fn test_blob_read() {
        let blobs = MemoryBlobStore::new();
        blobs.insert("/uploads/a.pdf", &b"%PDF"[..]).await;
        assert_eq!(
            blobs.read("/uploads/a.pdf").await.unwrap(),
            Some(Bytes::from_static(b"%PDF"))
        );
        assert_eq!(blobs.read("/uploads/missing.pdf").await.unwrap(), None);
    }
}
