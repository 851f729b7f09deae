use std::sync::Arc;
use async_trait::async_trait;
use crate::config::{DatabaseConfig, StoreBackend};
use crate::errors::StoreResult;
use super::{MemoryStore, RedisService};

/// Single-document operations over named collections of JSON documents.
///
/// Implementations only need per-document atomicity; no handler spans
/// more than one document in a single write.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stores `doc` under `id` unless the id is already taken. Returns whether it was stored.
    async fn insert_new(&self, collection: &str, id: &str, doc: &str) -> StoreResult<bool>;

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<String>>;

    /// Stores `doc` under `id`, replacing any previous version.
    async fn put(&self, collection: &str, id: &str, doc: &str) -> StoreResult<()>;

    async fn list(&self, collection: &str) -> StoreResult<Vec<String>>;

    async fn count(&self, collection: &str) -> StoreResult<usize>;

    /// Names of the collections holding at least one document.
    async fn collections(&self) -> StoreResult<Vec<String>>;

    async fn ping(&self) -> StoreResult<()>;
}

pub fn connect(config: &DatabaseConfig) -> StoreResult<Arc<dyn DocumentStore>> {
    match config.backend {
        StoreBackend::Redis => {
            let client = redis::Client::open(config.redis_url())?;
            tracing::info!("Using redis document store (namespace {})", config.namespace());
            Ok(Arc::new(RedisService::new(Arc::new(client), config.namespace())))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory document store; data is lost on restart");
            Ok(Arc::new(MemoryStore::default()))
        }
    }
}
