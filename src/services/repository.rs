use std::sync::Arc;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use crate::errors::{StoreError, StoreResult};
use super::DocumentStore;

/// A record type stored as one document in its own collection.
pub trait Document: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;
}

/// Typed access to the document store.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn DocumentStore>,
}

impl Repository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    /// Returns `false` without writing when the id is already taken.
    pub async fn insert<T: Document>(&self, doc: &T) -> StoreResult<bool> {
        let encoded = encode(doc)?;
        self.store.insert_new(T::COLLECTION, doc.id(), &encoded).await
    }

    pub async fn find<T: Document>(&self, id: &str) -> StoreResult<Option<T>> {
        self.store
            .get(T::COLLECTION, id)
            .await?
            .map(|raw| decode(id, &raw))
            .transpose()
    }

    pub async fn save<T: Document>(&self, doc: &T) -> StoreResult<()> {
        let encoded = encode(doc)?;
        self.store.put(T::COLLECTION, doc.id(), &encoded).await
    }

    /// All documents matching `keep`, oldest first.
    pub async fn list_where<T, F>(&self, keep: F) -> StoreResult<Vec<T>>
    where
        T: Document,
        F: Fn(&T) -> bool,
    {
        let mut docs = Vec::new();
        for raw in self.store.list(T::COLLECTION).await? {
            let doc: T = decode("<listed>", &raw)?;
            if keep(&doc) {
                docs.push(doc);
            }
        }
        docs.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(docs)
    }

    pub async fn count<T: Document>(&self) -> StoreResult<usize> {
        self.store.count(T::COLLECTION).await
    }
}

fn encode<T: Document>(doc: &T) -> StoreResult<String> {
    serde_json::to_string(doc).map_err(|source| StoreError::Encode {
        collection: T::COLLECTION.to_string(),
        source,
    })
}

fn decode<T: Document>(id: &str, raw: &str) -> StoreResult<T> {
    serde_json::from_str(raw).map_err(|source| StoreError::Corrupt {
        collection: T::COLLECTION.to_string(),
        id: id.to_string(),
        source,
    })
}
