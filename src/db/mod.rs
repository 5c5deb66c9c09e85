use serde_json::Value;

use crate::error::AppResult;

pub mod memory;
pub mod redis;

pub use memory::InMemoryDocumentStore;
pub use self::redis::create_redis_client;
pub use self::redis::DocumentKey;
pub use self::redis::RedisDocumentStore;

/// Collection holding one document per genre catalog
pub const GENRE_COLLECTION: &str = "Genre";

/// Key-value document storage addressed by collection and document id
///
/// Writes are last-write-wins per document; there is no transactional grouping.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads a document, returning `None` when it does not exist
    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<Value>>;

    /// Creates or replaces a document
    async fn set(&self, collection: &str, id: &str, document: Value) -> AppResult<()>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
