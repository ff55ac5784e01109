use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use tokio::sync::Mutex;

use crate::error::AppResult;
use crate::store::DocumentStore;

/// In-memory store for unit and integration testing
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, Vec<Document>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn stamp(mut doc: Document) -> Document {
        if !doc.contains_key("_id") {
            doc.insert("_id", ObjectId::new());
        }
        if !doc.contains_key("created_at") {
            doc.insert("created_at", bson::DateTime::now());
        }
        doc
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_document(&self, collection: &str, doc: Document) -> AppResult<String> {
        let doc = Self::stamp(doc);
        let id = doc
            .get_object_id("_id")
            .map(|oid| oid.to_hex())
            .unwrap_or_default();

        let mut inner = self.inner.lock().await;
        inner.entry(collection.to_string()).or_default().push(doc);
        Ok(id)
    }

    async fn get_documents(&self, collection: &str) -> AppResult<Vec<Document>> {
        let inner = self.inner.lock().await;
        Ok(inner.get(collection).cloned().unwrap_or_default())
    }

    async fn seed_if_empty(&self, collection: &str, docs: Vec<Document>) -> AppResult<bool> {
        // One lock spans the check and the writes, so concurrent seeders
        // cannot both observe an empty collection.
        let mut inner = self.inner.lock().await;
        let entry = inner.entry(collection.to_string()).or_default();

        if !entry.is_empty() {
            return Ok(false);
        }

        entry.extend(docs.into_iter().map(Self::stamp));
        Ok(true)
    }

    async fn list_collection_names(&self) -> AppResult<Vec<String>> {
        let inner = self.inner.lock().await;
        let mut names: Vec<String> = inner.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "in-memory"
    }
}
