use axum::{extract::State, routing::get, Router};
use serde::Serialize;

use crate::api::AppState;

pub mod views;

/// Front-end views reachable by URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    Home,
    Register,
    Login,
    Movie,
    Cart,
    LoginHome,
    Inventory,
    Watchlist,
}

/// One entry of the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
}

/// Static route table. Paths match exactly and case-sensitively.
pub const ROUTES: &[Route] = &[
    Route { path: "/", view: View::Home },
    Route { path: "/Register", view: View::Register },
    Route { path: "/Login", view: View::Login },
    Route { path: "/Movie", view: View::Movie },
    Route { path: "/Cart", view: View::Cart },
    Route { path: "/LoginHome", view: View::LoginHome },
    Route { path: "/Inventory", view: View::Inventory },
    Route { path: "/Watchlist", view: View::Watchlist },
];

/// Looks up the view for a request path
pub fn resolve(path: &str) -> Option<View> {
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map(|route| route.view)
}

/// Builds one GET route per table entry, each rendering its view model
pub fn view_router() -> Router<AppState> {
    ROUTES.iter().fold(Router::new(), |router, route| {
        let view = route.view;
        router.route(
            route.path,
            get(move |State(state): State<AppState>| views::render(state, view)),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_every_path() {
        assert_eq!(resolve("/"), Some(View::Home));
        assert_eq!(resolve("/Register"), Some(View::Register));
        assert_eq!(resolve("/Login"), Some(View::Login));
        assert_eq!(resolve("/Movie"), Some(View::Movie));
        assert_eq!(resolve("/Cart"), Some(View::Cart));
        assert_eq!(resolve("/LoginHome"), Some(View::LoginHome));
        assert_eq!(resolve("/Inventory"), Some(View::Inventory));
        assert_eq!(resolve("/Watchlist"), Some(View::Watchlist));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(resolve("/cart"), None);
        assert_eq!(resolve("/CART"), None);
    }

    #[test]
    fn test_resolve_exact_match_only() {
        assert_eq!(resolve("/Cart/"), None);
        assert_eq!(resolve("/Movie/42"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn test_paths_unique() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
    }
}
