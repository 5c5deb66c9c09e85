pub mod catalog;
pub mod providers;
pub mod session;

pub use catalog::{CatalogStore, GenreFailure, GenrePopulated, PopulateReport};
pub use providers::{MetadataProvider, TmdbProvider};
