use serde::Serialize;
use std::sync::Arc;

use crate::{
    db::{DocumentStore, GENRE_COLLECTION},
    error::{AppError, AppResult},
    models::{Genre, GenreDocument, MovieRef},
    services::providers::MetadataProvider,
};

/// Genre catalog persisted in the document store
///
/// Documents live in the `Genre` collection, one per genre label, each holding a
/// single `data` field with the ordered movie list.
#[derive(Clone)]
pub struct CatalogStore {
    provider: Arc<dyn MetadataProvider>,
    store: Arc<dyn DocumentStore>,
}

/// Outcome of refreshing every genre catalog
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PopulateReport {
    pub populated: Vec<GenrePopulated>,
    pub failed: Vec<GenreFailure>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenrePopulated {
    pub genre: Genre,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenreFailure {
    pub genre: Genre,
    pub error: String,
}

impl PopulateReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl CatalogStore {
    pub fn new(provider: Arc<dyn MetadataProvider>, store: Arc<dyn DocumentStore>) -> Self {
        Self { provider, store }
    }

    /// Fetches every genre from the provider and writes it to the store
    ///
    /// Genres run concurrently and independently; all of them are joined before
    /// returning. A failing genre is recorded in the report and never stops the rest.
    pub async fn populate_all(&self) -> PopulateReport {
        tracing::info!(
            provider = self.provider.name(),
            store = self.store.name(),
            genres = Genre::ALL.len(),
            "Populating genre catalogs"
        );

        let mut tasks = Vec::new();

        for genre in Genre::ALL {
            let catalog = self.clone();
            let task = tokio::spawn(async move { catalog.populate_genre(genre).await });
            tasks.push((genre, task));
        }

        let mut report = PopulateReport::default();

        for (genre, task) in tasks {
            match task.await {
                Ok(Ok(count)) => report.populated.push(GenrePopulated { genre, count }),
                Ok(Err(e)) => {
                    let stage = if e.is_network() { "fetch" } else { "store" };
                    tracing::error!(genre = %genre, stage, error = %e, "Genre populate failed");
                    report.failed.push(GenreFailure {
                        genre,
                        error: e.to_string(),
                    });
                }
                Err(e) => {
                    tracing::error!(genre = %genre, error = %e, "Task join error");
                    report.failed.push(GenreFailure {
                        genre,
                        error: AppError::Internal(e.to_string()).to_string(),
                    });
                }
            }
        }

        if report.is_complete() {
            tracing::info!(populated = report.populated.len(), "Genre catalogs populated");
        } else {
            tracing::warn!(
                success_count = report.populated.len(),
                error_count = report.failed.len(),
                "Partial genre populate failure"
            );
        }

        report
    }

    async fn populate_genre(&self, genre: Genre) -> AppResult<usize> {
        let data = self.provider.fetch_genre(genre.tmdb_code()).await?;
        let count = data.len();
        let document = serde_json::to_value(GenreDocument { data })?;
        self.store
            .set(GENRE_COLLECTION, genre.label(), document)
            .await?;
        Ok(count)
    }

    /// Reads the stored catalog for a genre label
    ///
    /// The label is used verbatim as the document id; any label without a stored
    /// document is `NotFound`.
    pub async fn load_genre(&self, label: &str) -> AppResult<Vec<MovieRef>> {
        let document = self
            .store
            .get(GENRE_COLLECTION, label)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{}/{}", GENRE_COLLECTION, label)))?;

        let genre: GenreDocument = serde_json::from_value(document)?;

        tracing::debug!(genre = %label, results = genre.data.len(), "Genre catalog loaded");

        Ok(genre.data)
    }
}
