use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

pub mod session;
pub mod watch_progress;

pub use session::Session;
pub use watch_progress::WatchProgress;

/// TMDB movie identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        MovieId(id)
    }
}

/// Minimal normalized movie record shown in listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRef {
    pub id: MovieId,
    /// Poster path relative to the TMDB image CDN
    pub poster: Option<String>,
}

/// Catalog categories. The label doubles as the document id in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Family,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    Adventure,
    Fantasy,
}

impl Genre {
    pub const ALL: [Genre; 5] = [
        Genre::Action,
        Genre::Family,
        Genre::ScienceFiction,
        Genre::Adventure,
        Genre::Fantasy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Family => "Family",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Adventure => "Adventure",
            Genre::Fantasy => "Fantasy",
        }
    }

    /// TMDB `with_genres` code
    pub fn tmdb_code(&self) -> u32 {
        match self {
            Genre::Action => 28,
            Genre::Family => 10751,
            Genre::ScienceFiction => 878,
            Genre::Adventure => 12,
            Genre::Fantasy => 14,
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.label() == s)
            .ok_or_else(|| format!("unknown genre: {}", s))
    }
}

/// Stored shape of one genre catalog document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreDocument {
    pub data: Vec<MovieRef>,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Raw response from GET /discover/movie
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbDiscoverResponse {
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
}

/// One discover result; fields beyond these are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl From<TmdbMovie> for MovieRef {
    fn from(movie: TmdbMovie) -> Self {
        MovieRef {
            id: MovieId(movie.id),
            poster: movie.poster_path,
        }
    }
}
