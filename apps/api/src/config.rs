use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KvBackend {
    Redis,
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobBackend {
    S3,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Settings {
    pub bucket: String,
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Application configuration loaded from environment variables.
/// Startup fails if a variable required by the selected backends is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub kv_backend: KvBackend,
    /// Set when `kv_backend` is Redis.
    pub redis_url: Option<String>,
    pub blob_backend: BlobBackend,
    /// Set when `blob_backend` is S3.
    pub s3: Option<S3Settings>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let kv_backend = match optional_env("KV_BACKEND").as_deref() {
            None | Some("redis") => KvBackend::Redis,
            Some("memory") => KvBackend::Memory,
            Some(other) => bail!("KV_BACKEND must be 'redis' or 'memory', got '{other}'"),
        };
        let blob_backend = match optional_env("BLOB_BACKEND").as_deref() {
            None | Some("s3") => BlobBackend::S3,
            Some("memory") => BlobBackend::Memory,
            Some(other) => bail!("BLOB_BACKEND must be 's3' or 'memory', got '{other}'"),
        };

        let redis_url = match kv_backend {
            KvBackend::Redis => Some(require_env("REDIS_URL")?),
            KvBackend::Memory => None,
        };
        let s3 = match blob_backend {
            BlobBackend::S3 => Some(S3Settings {
                bucket: require_env("S3_BUCKET")?,
                endpoint: require_env("S3_ENDPOINT")?,
                access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
                secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            }),
            BlobBackend::Memory => None,
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            kv_backend,
            redis_url,
            blob_backend,
            s3,
        })
    }

    /// All-in-memory configuration used by tests.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            kv_backend: KvBackend::Memory,
            redis_url: None,
            blob_backend: BlobBackend::Memory,
            s3: None,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty())
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
