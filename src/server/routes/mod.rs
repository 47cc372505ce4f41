//! API routes and handlers.

mod games;

use axum::{Json, Router, extract::State, routing::get};

use crate::catalog::{CatalogDocument, LoadStatus};

use super::state::AppState;

/// Build the API router.
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/status", get(load_status))
        .route("/catalog", get(catalog_document))
        .route("/games", get(games::list_games))
        .route("/games/{id}", get(games::get_game))
        .route("/search", get(games::search_games))
        .route("/top-rated", get(games::top_rated))
        .route("/recent", get(games::most_recent))
        .route("/stats", get(games::statistics));

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_routes)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Outcome of the one-time catalog load.
async fn load_status(State(state): State<AppState>) -> Json<LoadStatus> {
    Json(state.store().status())
}

/// The full collection in the shape of the static resource.
async fn catalog_document(State(state): State<AppState>) -> Json<CatalogDocument> {
    Json(CatalogDocument {
        games: state.store().snapshot().to_vec(),
    })
}
