use chrono::Utc;
use std::collections::HashMap;

use super::{MovieId, MovieRef, WatchProgress};

/// Per-session browsing and ownership state
///
/// Every operation here is synchronous and infallible. Purchase exclusivity holds at
/// all times: an id present in `inventory` is never accepted into `cart`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Currently displayed genre listing
    movies: Vec<MovieRef>,
    cart: HashMap<MovieId, MovieRef>,
    inventory: HashMap<MovieId, MovieRef>,
    watchlist: HashMap<MovieId, MovieRef>,
    watch_progress: HashMap<MovieId, WatchProgress>,
}

impl Session {
    /// Creates an empty session
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movies(&self) -> &[MovieRef] {
        &self.movies
    }

    /// Replaces the displayed listing wholesale
    pub fn replace_movies(&mut self, movies: Vec<MovieRef>) {
        self.movies = movies;
    }

    // Cart

    /// Stages a movie for purchase. Returns false and leaves the cart untouched
    /// when the movie is already owned.
    pub fn add_to_cart(&mut self, id: MovieId, movie: MovieRef) -> bool {
        if self.inventory.contains_key(&id) {
            return false;
        }
        self.cart.insert(id, movie);
        true
    }

    pub fn remove_from_cart(&mut self, id: MovieId) {
        self.cart.remove(&id);
    }

    pub fn cart(&self) -> Vec<MovieRef> {
        sorted(&self.cart)
    }

    pub fn is_in_cart(&self, id: MovieId) -> bool {
        self.cart.contains_key(&id)
    }

    /// Moves every cart entry into inventory and empties the cart.
    ///
    /// Runs under `&mut self` without suspension, so no observer sees a half-moved cart.
    /// Returns the number of movies purchased.
    pub fn complete_purchase(&mut self) -> usize {
        let purchased = self.cart.len();
        self.inventory.extend(self.cart.drain());
        purchased
    }

    // Inventory

    pub fn remove_from_inventory(&mut self, id: MovieId) {
        self.inventory.remove(&id);
    }

    pub fn is_in_inventory(&self, id: MovieId) -> bool {
        self.inventory.contains_key(&id)
    }

    pub fn inventory(&self) -> Vec<MovieRef> {
        sorted(&self.inventory)
    }

    // Watchlist

    pub fn add_to_watchlist(&mut self, id: MovieId, movie: MovieRef) {
        self.watchlist.insert(id, movie);
    }

    pub fn remove_from_watchlist(&mut self, id: MovieId) {
        self.watchlist.remove(&id);
    }

    pub fn is_in_watchlist(&self, id: MovieId) -> bool {
        self.watchlist.contains_key(&id)
    }

    pub fn watchlist(&self) -> Vec<MovieRef> {
        sorted(&self.watchlist)
    }

    // Watch progress

    /// Records progress (clamped to 0..=100) stamped with the current time
    pub fn update_watch_progress(&mut self, id: MovieId, progress: f64) {
        self.watch_progress
            .insert(id, WatchProgress::clamped(progress, Utc::now()));
    }

    /// Progress for a movie, or `{0, None}` when nothing was recorded
    pub fn get_watch_progress(&self, id: MovieId) -> WatchProgress {
        self.watch_progress.get(&id).copied().unwrap_or_default()
    }

    pub fn mark_as_watched(&mut self, id: MovieId) {
        self.update_watch_progress(id, f64::from(super::watch_progress::MAX_PROGRESS));
    }

    pub fn reset_watch_progress(&mut self, id: MovieId) {
        self.watch_progress.remove(&id);
    }
}

fn sorted(collection: &HashMap<MovieId, MovieRef>) -> Vec<MovieRef> {
    let mut movies: Vec<MovieRef> = collection.values().cloned().collect();
    movies.sort_by_key(|movie| movie.id);
    movies
}
