use redis::{Client, AsyncCommands};
use std::sync::Arc;
use async_trait::async_trait;
use crate::errors::StoreResult;
use super::DocumentStore;

// Each collection lives in one redis hash, `<namespace>:<collection>`,
// mapping document id to its JSON encoding.
#[derive(Clone)]
pub struct RedisService {
    client: Arc<Client>,
    namespace: String,
}

impl RedisService {
    pub fn new(client: Arc<Client>, namespace: &str) -> Self {
        Self {
            client,
            namespace: namespace.to_string(),
        }
    }

    fn key(&self, collection: &str) -> String {
        format!("{}:{}", self.namespace, collection)
    }
}

#[async_trait]
impl DocumentStore for RedisService {
    async fn insert_new(&self, collection: &str, id: &str, doc: &str) -> StoreResult<bool> {
        let mut conn = self.client.get_async_connection().await?;
        let inserted: bool = conn.hset_nx(self.key(collection), id, doc).await?;
        Ok(inserted)
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.get_async_connection().await?;
        let doc: Option<String> = conn.hget(self.key(collection), id).await?;
        Ok(doc)
    }

    async fn put(&self, collection: &str, id: &str, doc: &str) -> StoreResult<()> {
        let mut conn = self.client.get_async_connection().await?;
        conn.hset::<_, _, _, ()>(self.key(collection), id, doc).await?;
        Ok(())
    }

    async fn list(&self, collection: &str) -> StoreResult<Vec<String>> {
        let mut conn = self.client.get_async_connection().await?;
        let docs: Vec<String> = conn.hvals(self.key(collection)).await?;
        Ok(docs)
    }

    async fn count(&self, collection: &str) -> StoreResult<usize> {
        let mut conn = self.client.get_async_connection().await?;
        let len: usize = conn.hlen(self.key(collection)).await?;
        Ok(len)
    }

    async fn collections(&self) -> StoreResult<Vec<String>> {
        let mut conn = self.client.get_async_connection().await?;
        let prefix = format!("{}:", self.namespace);
        // Incremental SCAN; KEYS would block the server
        let mut names = Vec::new();
        let mut keys: redis::AsyncIter<String> = conn.scan_match(format!("{}*", prefix)).await?;
        while let Some(key) = keys.next_item().await {
            if let Some(name) = key.strip_prefix(&prefix) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.client.get_async_connection().await?;
        redis::cmd("PING").query_async::<_, String>(&mut conn).await?;
        Ok(())
    }
}
