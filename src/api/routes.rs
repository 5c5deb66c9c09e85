use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::AppState;
use crate::middleware::request_id::{
    make_span_with_request_id, request_id_header, MakeSessionRequestId,
};
use crate::routes::view_router;

/// Creates the main router: health, front-end views and the JSON API
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(view_router())
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    request_id_header(),
                    MakeSessionRequestId,
                ))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(PropagateRequestIdLayer::new(request_id_header())),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Listing
        .route("/movies", get(handlers::get_movies))
        .route("/movies/load", post(handlers::load_movies))
        // Cart
        .route("/cart", get(handlers::get_cart).post(handlers::add_to_cart))
        .route("/cart/checkout", post(handlers::checkout))
        .route(
            "/cart/:id",
            get(handlers::is_in_cart).delete(handlers::remove_from_cart),
        )
        // Inventory
        .route("/inventory", get(handlers::get_inventory))
        .route(
            "/inventory/:id",
            get(handlers::is_in_inventory).delete(handlers::remove_from_inventory),
        )
        // Watchlist
        .route(
            "/watchlist",
            get(handlers::get_watchlist).post(handlers::add_to_watchlist),
        )
        .route(
            "/watchlist/:id",
            get(handlers::is_in_watchlist).delete(handlers::remove_from_watchlist),
        )
        // Watch progress
        .route(
            "/progress/:id",
            get(handlers::get_progress)
                .put(handlers::update_progress)
                .delete(handlers::reset_progress),
        )
        .route("/progress/:id/watched", post(handlers::mark_watched))
        // Auth flag
        .route("/auth", get(handlers::get_auth))
        .route("/auth/login", post(handlers::login))
        .route("/auth/logout", post(handlers::logout))
        // Admin
        .route("/admin/populate", post(handlers::populate))
}
