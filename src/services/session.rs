use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{MovieRef, Session},
    services::CatalogStore,
};

/// Loads a genre catalog into the session's displayed listing
///
/// The store read happens before the session lock is taken, so other session
/// operations keep running while the fetch is in flight. On failure the listing
/// is left as it was.
pub async fn load_genre(
    session: &RwLock<Session>,
    catalog: &CatalogStore,
    label: &str,
) -> AppResult<Vec<MovieRef>> {
    let movies = catalog.load_genre(label).await?;

    session.write().await.replace_movies(movies.clone());

    tracing::info!(genre = %label, results = movies.len(), "Session listing replaced");

    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DocumentStore, InMemoryDocumentStore};
    use crate::error::AppError;
    use crate::models::MovieId;
    use crate::services::providers::MockMetadataProvider;
    use serde_json::json;
    use std::sync::Arc;

    async fn catalog_with_action() -> CatalogStore {
        let store = Arc::new(InMemoryDocumentStore::new());
        store
            .set("Genre", "Action", json!({ "data": [{ "id": 1, "poster": "/a.jpg" }] }))
            .await
            .unwrap();
        CatalogStore::new(Arc::new(MockMetadataProvider::new()), store)
    }

    #[tokio::test]
    async fn test_load_genre_sets_movies() {
        let catalog = catalog_with_action().await;
        let session = RwLock::new(Session::new());

        load_genre(&session, &catalog, "Action").await.unwrap();

        let expected = vec![MovieRef {
            id: MovieId(1),
            poster: Some("/a.jpg".to_string()),
        }];
        assert_eq!(session.read().await.movies(), expected.as_slice());
    }

    #[tokio::test]
    async fn test_load_unknown_genre_keeps_listing() {
        let catalog = catalog_with_action().await;
        let session = RwLock::new(Session::new());
        load_genre(&session, &catalog, "Action").await.unwrap();

        let err = load_genre(&session, &catalog, "Unknown").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(session.read().await.movies().len(), 1);
    }
}
