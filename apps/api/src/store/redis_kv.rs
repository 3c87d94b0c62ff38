use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tracing::info;

use crate::store::{KvEntry, KvStore, StoreError};

/// Redis-backed [`KvStore`]. The multiplexed connection is cheap to clone and
/// shared by every request.
#[derive(Clone)]
pub struct RedisKvStore {
    conn: MultiplexedConnection,
}

impl RedisKvStore {
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)?;
        let conn = client.get_multiplexed_tokio_connection().await?;
        info!("Redis connection established");
        Ok(Self { conn })
    }
}

/// Escapes glob metacharacters so a prefix matches literally in `SCAN MATCH`.
fn glob_escape(prefix: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('*');
    out
}

/// SCAN is cursor-based and may yield a key more than once.
fn ordered_unique(mut keys: Vec<String>) -> Vec<String> {
    keys.sort();
    keys.dedup();
    keys
}

#[async_trait]
impl KvStore for RedisKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    async fn list(&self, prefix: &str, return_values: bool) -> Result<Vec<KvEntry>, StoreError> {
        let mut conn = self.conn.clone();
        let mut scanned: Vec<String> = Vec::new();
        {
            let mut iter = conn.scan_match::<_, String>(glob_escape(prefix)).await?;
            while let Some(key) = iter.next_item().await {
                scanned.push(key);
            }
        }
        let keys = ordered_unique(scanned);

        if !return_values || keys.is_empty() {
            return Ok(keys
                .into_iter()
                .map(|key| KvEntry { key, value: None })
                .collect());
        }

        let values: Vec<Option<String>> = redis::cmd("MGET")
            .arg(&keys)
            .query_async(&mut conn)
            .await?;
        Ok(keys
            .into_iter()
            .zip(values)
            .map(|(key, value)| KvEntry { key, value })
            .collect())
    }
}
