/// TMDB (The Movie Database) provider
///
/// Uses the discover endpoint to list movies per genre:
/// `GET {api_url}/discover/movie?api_key=…&with_genres=<code>&include_adult=false`
use crate::{
    error::{AppError, AppResult},
    models::{MovieRef, TmdbDiscoverResponse},
    services::providers::MetadataProvider,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    async fn fetch_genre(&self, genre_code: u32) -> AppResult<Vec<MovieRef>> {
        let url = format!("{}/discover/movie", self.api_url);
        let genre = genre_code.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("with_genres", genre.as_str()),
                ("include_adult", "false"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB returned status {}: {}",
                status, body
            )));
        }

        let discover: TmdbDiscoverResponse = response.json().await?;
        let movies: Vec<MovieRef> = discover.results.into_iter().map(MovieRef::from).collect();

        tracing::info!(
            genre_code,
            results = movies.len(),
            provider = "tmdb",
            "Genre discover completed"
        );

        Ok(movies)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
