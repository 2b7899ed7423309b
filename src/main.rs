//! registrar-server: HTTP entry point
//!
//! Reads `AppConfig` (defaults, `REGISTRAR_CONFIG` YAML file, environment),
//! opens the configured document store and serves the REST API.

use anyhow::Result;
use registrar::config::{AppConfig, StorageBackend};
use registrar::core::store::DocumentStore;
use registrar::server::ServerBuilder;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    tracing::info!(
        address = %config.bind_address(),
        backend = ?config.storage.backend,
        cors_origin = ?config.server.cors_origin,
        "starting registrar server"
    );

    let store = open_store(&config).await?;

    let mut builder = ServerBuilder::new().with_shared_store(store);
    if let Some(origin) = &config.server.cors_origin {
        builder = builder.with_cors_origin(origin.clone());
    }

    builder.serve(&config.bind_address()).await
}

async fn open_store(config: &AppConfig) -> Result<Arc<dyn DocumentStore>> {
    match config.storage.backend {
        StorageBackend::InMemory => in_memory_store(),
        StorageBackend::Mongodb => mongodb_store(config).await,
    }
}

#[cfg(feature = "in-memory")]
fn in_memory_store() -> Result<Arc<dyn DocumentStore>> {
    tracing::warn!("using the in-memory store, data is lost on shutdown");
    Ok(Arc::new(registrar::storage::InMemoryDocumentStore::new()))
}

#[cfg(not(feature = "in-memory"))]
fn in_memory_store() -> Result<Arc<dyn DocumentStore>> {
    anyhow::bail!("in-memory backend requested but the `in-memory` feature is disabled")
}

#[cfg(feature = "mongodb_backend")]
async fn mongodb_store(config: &AppConfig) -> Result<Arc<dyn DocumentStore>> {
    use registrar::storage::MongoDocumentStore;

    let mongo = &config.storage.mongodb;
    let client = mongodb::Client::with_uri_str(&mongo.uri).await?;
    let store = MongoDocumentStore::new(client.database(&mongo.database));
    store.ensure_indexes(&registrar::entities::unique_keys()).await?;

    tracing::info!(database = %mongo.database, "connected to MongoDB");
    Ok(Arc::new(store))
}

#[cfg(not(feature = "mongodb_backend"))]
async fn mongodb_store(_config: &AppConfig) -> Result<Arc<dyn DocumentStore>> {
    anyhow::bail!("mongodb backend requested but the `mongodb_backend` feature is disabled")
}
