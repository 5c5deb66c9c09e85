use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::error::AppResult;

/// Process-local document store, used when no Redis URL is configured and in tests
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<(String, String), Value>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<Value>> {
        let documents = self.documents.read().await;
        Ok(documents
            .get(&(collection.to_string(), id.to_string()))
            .cloned())
    }

    async fn set(&self, collection: &str, id: &str, document: Value) -> AppResult<()> {
        let mut documents = self.documents.write().await;
        documents.insert((collection.to_string(), id.to_string()), document);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_document() {
        let store = InMemoryDocumentStore::new();
        assert_eq!(store.get("Genre", "Action").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = InMemoryDocumentStore::new();
        store.set("Genre", "Action", json!({ "data": [] })).await.unwrap();
        store
            .set("Genre", "Action", json!({ "data": [{ "id": 1, "poster": null }] }))
            .await
            .unwrap();

        let doc = store.get("Genre", "Action").await.unwrap().unwrap();
        assert_eq!(doc["data"][0]["id"], 1);
    }

    #[tokio::test]
    async fn test_collections_are_separate() {
        let store = InMemoryDocumentStore::new();
        store.set("Genre", "Action", json!({})).await.unwrap();
        assert_eq!(store.get("Other", "Action").await.unwrap(), None);
    }
}
