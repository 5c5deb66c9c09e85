use axum::Json;
use serde::Serialize;

use super::View;
use crate::{
    api::AppState,
    models::{Genre, MovieRef, Session, WatchProgress},
};

/// View model returned for a front-end route
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub view: View,
    pub logged_in: bool,
    pub content: ViewContent,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum ViewContent {
    Genres(Vec<Genre>),
    Movies(Vec<MovieRef>),
    Library(Vec<OwnedMovie>),
    Empty,
}

/// An inventory entry alongside how far it has been watched
#[derive(Debug, Serialize, PartialEq)]
pub struct OwnedMovie {
    #[serde(flatten)]
    pub movie: MovieRef,
    pub watch_progress: WatchProgress,
}

pub async fn render(state: AppState, view: View) -> Json<ViewResponse> {
    let session = state.session.read().await;
    Json(ViewResponse {
        view,
        logged_in: state.auth.is_logged_in(),
        content: content_for(&session, view),
    })
}

fn content_for(session: &Session, view: View) -> ViewContent {
    match view {
        View::Home => ViewContent::Genres(Genre::ALL.to_vec()),
        View::Movie => ViewContent::Movies(session.movies().to_vec()),
        View::Cart => ViewContent::Movies(session.cart()),
        View::Watchlist => ViewContent::Movies(session.watchlist()),
        View::Inventory => ViewContent::Library(
            session
                .inventory()
                .into_iter()
                .map(|movie| OwnedMovie {
                    watch_progress: session.get_watch_progress(movie.id),
                    movie,
                })
                .collect(),
        ),
        View::Register | View::Login | View::LoginHome => ViewContent::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieId;

    fn movie(id: u64) -> MovieRef {
        MovieRef {
            id: MovieId(id),
            poster: None,
        }
    }

    #[test]
    fn test_inventory_includes_progress() {
        let mut session = Session::new();
        session.add_to_cart(MovieId(2), movie(2));
        session.complete_purchase();
        session.update_watch_progress(MovieId(2), 30.0);

        match content_for(&session, View::Inventory) {
            ViewContent::Library(owned) => {
                assert_eq!(owned.len(), 1);
                assert_eq!(owned[0].movie.id, MovieId(2));
                assert_eq!(owned[0].watch_progress.progress, 30);
            }
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_auth_views_are_empty() {
        let session = Session::new();
        assert_eq!(content_for(&session, View::Login), ViewContent::Empty);
        assert_eq!(content_for(&session, View::Register), ViewContent::Empty);
    }

    #[test]
    fn test_home_lists_genres() {
        let json = serde_json::to_value(content_for(&Session::new(), View::Home)).unwrap();
        assert_eq!(json["kind"], "genres");
        assert_eq!(json["items"][2], "Science Fiction");
    }
}
