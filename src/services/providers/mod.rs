/// Movie metadata provider abstraction
///
/// The catalog is filled from a third-party metadata API. Each provider turns a
/// provider-specific genre code into normalized `MovieRef`s.
use crate::{error::AppResult, models::MovieRef};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie metadata providers
///
/// One call issues one outbound query with no retry. Network failures and non-2xx
/// responses propagate to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch the non-adult movies tagged with `genre_code`
    async fn fetch_genre(&self, genre_code: u32) -> AppResult<Vec<MovieRef>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
