use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::{MovieId, MovieRef, WatchProgress};
use crate::services::{session, PopulateReport};

use super::extract::{ApiJson, ApiPath};
use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct LoadGenreRequest {
    pub genre: String,
}

#[derive(Debug, Deserialize)]
pub struct MovieRequest {
    pub movie: MovieRef,
}

#[derive(Debug, Serialize)]
pub struct AddToCartResponse {
    pub added: bool,
}

#[derive(Debug, Serialize)]
pub struct InCartResponse {
    pub in_cart: bool,
}

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub purchased: usize,
    pub inventory: Vec<MovieRef>,
}

#[derive(Debug, Serialize)]
pub struct OwnedResponse {
    pub owned: bool,
}

#[derive(Debug, Serialize)]
pub struct ListedResponse {
    pub listed: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProgressRequest {
    /// Raw percentage; any JSON number is accepted and clamped into 0..=100
    pub progress: f64,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub logged_in: bool,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

// Movies

/// Currently displayed genre listing
pub async fn get_movies(State(state): State<AppState>) -> Json<Vec<MovieRef>> {
    let session = state.session.read().await;
    Json(session.movies().to_vec())
}

/// Load a genre catalog into the listing
pub async fn load_movies(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoadGenreRequest>,
) -> AppResult<Json<Vec<MovieRef>>> {
    let movies = session::load_genre(&state.session, &state.catalog, &request.genre).await?;
    Ok(Json(movies))
}

// Cart

pub async fn get_cart(State(state): State<AppState>) -> Json<Vec<MovieRef>> {
    Json(state.session.read().await.cart())
}

/// Stage a movie for purchase; 409 when it is already owned
pub async fn add_to_cart(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<MovieRequest>,
) -> (StatusCode, Json<AddToCartResponse>) {
    let id = request.movie.id;
    let added = state.session.write().await.add_to_cart(id, request.movie);

    if added {
        (StatusCode::OK, Json(AddToCartResponse { added }))
    } else {
        tracing::debug!(movie_id = %id, "Rejected cart add for owned movie");
        (StatusCode::CONFLICT, Json(AddToCartResponse { added }))
    }
}

pub async fn is_in_cart(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<MovieId>,
) -> Json<InCartResponse> {
    let in_cart = state.session.read().await.is_in_cart(id);
    Json(InCartResponse { in_cart })
}

pub async fn remove_from_cart(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<MovieId>,
) -> StatusCode {
    state.session.write().await.remove_from_cart(id);
    StatusCode::NO_CONTENT
}

/// Move the whole cart into inventory
pub async fn checkout(State(state): State<AppState>) -> Json<PurchaseResponse> {
    let mut session = state.session.write().await;
    let purchased = session.complete_purchase();

    tracing::info!(purchased, "Purchase completed");

    Json(PurchaseResponse {
        purchased,
        inventory: session.inventory(),
    })
}

// Inventory

pub async fn get_inventory(State(state): State<AppState>) -> Json<Vec<MovieRef>> {
    Json(state.session.read().await.inventory())
}

pub async fn is_in_inventory(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<MovieId>,
) -> Json<OwnedResponse> {
    let owned = state.session.read().await.is_in_inventory(id);
    Json(OwnedResponse { owned })
}

pub async fn remove_from_inventory(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<MovieId>,
) -> StatusCode {
    state.session.write().await.remove_from_inventory(id);
    StatusCode::NO_CONTENT
}

// Watchlist

pub async fn get_watchlist(State(state): State<AppState>) -> Json<Vec<MovieRef>> {
    Json(state.session.read().await.watchlist())
}

pub async fn add_to_watchlist(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<MovieRequest>,
) -> StatusCode {
    let id = request.movie.id;
    state.session.write().await.add_to_watchlist(id, request.movie);
    StatusCode::OK
}

pub async fn is_in_watchlist(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<MovieId>,
) -> Json<ListedResponse> {
    let listed = state.session.read().await.is_in_watchlist(id);
    Json(ListedResponse { listed })
}

pub async fn remove_from_watchlist(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<MovieId>,
) -> StatusCode {
    state.session.write().await.remove_from_watchlist(id);
    StatusCode::NO_CONTENT
}

// Watch progress

pub async fn get_progress(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<MovieId>,
) -> Json<WatchProgress> {
    Json(state.session.read().await.get_watch_progress(id))
}

pub async fn update_progress(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<MovieId>,
    ApiJson(request): ApiJson<UpdateProgressRequest>,
) -> Json<WatchProgress> {
    let mut session = state.session.write().await;
    session.update_watch_progress(id, request.progress);
    Json(session.get_watch_progress(id))
}

pub async fn mark_watched(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<MovieId>,
) -> Json<WatchProgress> {
    let mut session = state.session.write().await;
    session.mark_as_watched(id);
    Json(session.get_watch_progress(id))
}

pub async fn reset_progress(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<MovieId>,
) -> StatusCode {
    state.session.write().await.reset_watch_progress(id);
    StatusCode::NO_CONTENT
}

// Auth flag

pub async fn get_auth(State(state): State<AppState>) -> Json<AuthResponse> {
    Json(AuthResponse {
        logged_in: state.auth.is_logged_in(),
    })
}

pub async fn login(State(state): State<AppState>) -> Json<AuthResponse> {
    state.auth.sign_in();
    Json(AuthResponse { logged_in: true })
}

pub async fn logout(State(state): State<AppState>) -> Json<AuthResponse> {
    state.auth.sign_out();
    Json(AuthResponse { logged_in: false })
}

// Admin

/// Refresh every genre catalog from the metadata provider
pub async fn populate(State(state): State<AppState>) -> (StatusCode, Json<PopulateReport>) {
    let report = state.catalog.populate_all().await;
    let status = if report.is_complete() {
        StatusCode::OK
    } else {
        StatusCode::MULTI_STATUS
    };
    (status, Json(report))
}
