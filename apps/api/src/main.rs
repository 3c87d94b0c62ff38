mod builder;
mod config;
mod errors;
mod models;
mod render;
mod routes;
mod state;
mod store;
mod suggestions;

use anyhow::{Context, Result};
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{BlobBackend, Config, KvBackend, S3Settings};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{BlobStore, KvStore, MemoryBlobStore, MemoryKvStore, RedisKvStore, S3BlobStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Builder API v{}", env!("CARGO_PKG_VERSION"));

    // Key-value store
    let kv: Arc<dyn KvStore> = match (config.kv_backend, &config.redis_url) {
        (KvBackend::Redis, Some(url)) => Arc::new(
            RedisKvStore::connect(url)
                .await
                .context("Failed to connect to Redis")?,
        ),
        (KvBackend::Redis, None) => anyhow::bail!("REDIS_URL is required for the redis backend"),
        (KvBackend::Memory, _) => {
            info!("Using in-memory KV store");
            Arc::new(MemoryKvStore::new())
        }
    };

    // Blob store (S3 / MinIO)
    let blobs: Arc<dyn BlobStore> = match (config.blob_backend, &config.s3) {
        (BlobBackend::S3, Some(s3)) => {
            let client = build_s3_client(s3).await;
            info!("S3 client initialized (bucket: {})", s3.bucket);
            Arc::new(S3BlobStore::new(client, s3.bucket.clone()))
        }
        (BlobBackend::S3, None) => anyhow::bail!("S3 settings are required for the s3 backend"),
        (BlobBackend::Memory, _) => {
            info!("Using in-memory blob store");
            Arc::new(MemoryBlobStore::new())
        }
    };

    let state = AppState {
        kv,
        blobs,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the editor's host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(settings: &S3Settings) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &settings.access_key_id,
        &settings.secret_access_key,
        None,
        None,
        "resume-builder-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&settings.endpoint)
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&s3_config)
        .force_path_style(true)
        .build();

    aws_sdk_s3::Client::from_conf(s3_config)
}
