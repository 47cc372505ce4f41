//! Query-layer handlers.

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::catalog::{DEFAULT_RECENT_LIMIT, DEFAULT_TOP_RATED_LIMIT, Game, GameFilter, GameId, Statistics};

use super::super::{
    error::ApiError,
    extract::{ApiPath, ApiQuery},
    state::AppState,
};

/// Query parameters for listing games.
#[derive(Debug, Deserialize, Default)]
pub struct ListQuery {
    pub category: Option<String>,
    pub platform: Option<String>,
    pub free: Option<bool>,
    pub min_rating: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ListQuery {
    fn into_filter(self) -> Result<GameFilter, ApiError> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(ApiError::invalid_price_range(min, max));
            }
        }

        Ok(GameFilter {
            category: self.category,
            platform: self.platform,
            is_free: self.free,
            min_rating: self.min_rating,
            min_price: self.min_price,
            max_price: self.max_price,
        })
    }
}

/// Query parameters for free-text search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// Query parameters for top-N lists.
#[derive(Debug, Deserialize, Default)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

/// List games, optionally filtered.
pub async fn list_games(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let filter = query.into_filter()?;
    Ok(Json(state.store().filter(filter).current()))
}

/// Get one game by identifier.
pub async fn get_game(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<GameId>,
) -> Result<Json<Game>, ApiError> {
    state
        .store()
        .find_by_id(id)
        .current()
        .map(Json)
        .ok_or_else(|| ApiError::game_not_found(id))
}

/// Case-insensitive search on name, developer and category.
pub async fn search_games(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Json<Vec<Game>> {
    Json(state.store().search(query.q).current())
}

pub async fn top_rated(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LimitQuery>,
) -> Json<Vec<Game>> {
    let limit = query.limit.unwrap_or(DEFAULT_TOP_RATED_LIMIT);
    Json(state.store().top_rated(limit).current())
}

pub async fn most_recent(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LimitQuery>,
) -> Json<Vec<Game>> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    Json(state.store().most_recent(limit).current())
}

pub async fn statistics(State(state): State<AppState>) -> Json<Statistics> {
    Json(state.store().statistics().current())
}
