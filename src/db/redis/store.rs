use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use redis::Client;
use serde_json::Value;
use std::fmt::Display;

use crate::db::DocumentStore;
use crate::error::AppResult;

/// Redis key for a document: `<collection>/<id>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentKey<'a> {
    pub collection: &'a str,
    pub id: &'a str,
}

impl<'a> DocumentKey<'a> {
    pub fn new(collection: &'a str, id: &'a str) -> Self {
        Self { collection, id }
    }
}

impl Display for DocumentKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

/// Creates a Redis client for document storage
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// Document store backed by Redis string values holding JSON text
///
/// Documents never expire. A single `ConnectionManager` is shared by clones and
/// reconnects on its own after connection loss.
#[derive(Clone)]
pub struct RedisDocumentStore {
    conn: ConnectionManager,
}

impl RedisDocumentStore {
    pub async fn new(client: Client) -> AppResult<Self> {
        let conn = ConnectionManager::new(client).await?;
        tracing::info!("Connected to Redis document store");
        Ok(Self { conn })
    }
}

#[async_trait::async_trait]
impl DocumentStore for RedisDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<Value>> {
        let key = DocumentKey::new(collection, id);
        let mut conn = self.conn.clone();
        let stored: Option<String> = conn.get(key.to_string()).await?;

        match stored {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => {
                tracing::debug!(key = %key, "Document not found");
                Ok(None)
            }
        }
    }

    async fn set(&self, collection: &str, id: &str, document: Value) -> AppResult<()> {
        let key = DocumentKey::new(collection, id);
        let json = serde_json::to_string(&document)?;
        let mut conn = self.conn.clone();
        let _: () = conn.set(key.to_string(), json).await?;
        tracing::debug!(key = %key, "Document written");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn redis_url() -> String {
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    #[test]
    fn test_document_key_display() {
        let key = DocumentKey::new("Genre", "Action");
        assert_eq!(format!("{}", key), "Genre/Action");
    }

    #[test]
    fn test_document_key_keeps_spaces() {
        let key = DocumentKey::new("Genre", "Science Fiction");
        assert_eq!(format!("{}", key), "Genre/Science Fiction");
    }

    #[tokio::test]
    #[ignore = "requires a running Redis server"]
    async fn test_missing_document_is_none() {
        let client = create_redis_client(&redis_url()).unwrap();
        let store = RedisDocumentStore::new(client).await.unwrap();

        let doc = store.get("Genre", "nonexistent_doc_12345").await.unwrap();
        assert_eq!(doc, None);
    }

    #[tokio::test]
    #[ignore = "requires a running Redis server"]
    async fn test_set_then_get() {
        let client = create_redis_client(&redis_url()).unwrap();
        let store = RedisDocumentStore::new(client.clone()).await.unwrap();

        let document = json!({ "data": [{ "id": 1, "poster": "/a.jpg" }] });
        store
            .set("TestGenre", "set_then_get", document.clone())
            .await
            .unwrap();

        let retrieved = store.get("TestGenre", "set_then_get").await.unwrap();
        assert_eq!(retrieved, Some(document));

        // Clean up
        let mut conn = client.get_multiplexed_async_connection().await.unwrap();
        let _: () = conn.del("TestGenre/set_then_get").await.unwrap();
    }
}
