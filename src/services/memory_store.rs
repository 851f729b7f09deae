use std::collections::{BTreeMap, HashMap};
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::errors::StoreResult;
use super::DocumentStore;

/// Process-local store, for single-node development runs and tests.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, String>>>,
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_new(&self, collection: &str, id: &str, doc: &str) -> StoreResult<bool> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.contains_key(id) {
            return Ok(false);
        }
        docs.insert(id.to_string(), doc.to_string());
        Ok(true)
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<String>> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|docs| docs.get(id)).cloned())
    }

    async fn put(&self, collection: &str, id: &str, doc: &str) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), doc.to_string());
        Ok(())
    }

    async fn list(&self, collection: &str) -> StoreResult<Vec<String>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn count(&self, collection: &str) -> StoreResult<usize> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).map_or(0, BTreeMap::len))
    }

    async fn collections(&self) -> StoreResult<Vec<String>> {
        let collections = self.collections.read().await;
        let mut names: Vec<String> = collections
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_new_refuses_taken_ids() {
        let store = MemoryStore::default();
        assert!(store.insert_new("user", "a@corp.io", "{}").await.unwrap());
        assert!(!store.insert_new("user", "a@corp.io", r#"{"x":1}"#).await.unwrap());
        assert_eq!(store.get("user", "a@corp.io").await.unwrap().as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn put_replaces_and_count_tracks_collection() {
        let store = MemoryStore::default();
        assert_eq!(store.count("task").await.unwrap(), 0);

        store.put("task", "1", "old").await.unwrap();
        store.put("task", "1", "new").await.unwrap();
        store.put("task", "2", "other").await.unwrap();

        assert_eq!(store.count("task").await.unwrap(), 2);
        assert_eq!(store.get("task", "1").await.unwrap().as_deref(), Some("new"));
        assert_eq!(store.list("task").await.unwrap().len(), 2);
        assert!(store.get("report", "1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn collections_lists_non_empty_ones() {
        let store = MemoryStore::default();
        store.put("user", "a", "{}").await.unwrap();
        store.put("task", "b", "{}").await.unwrap();
        assert_eq!(store.collections().await.unwrap(), vec!["task", "user"]);
    }
}
