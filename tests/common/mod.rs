//! Common test utilities and fixtures.
//!
//! Shared catalog fixtures for the integration tests. The HTTP helpers are
//! only compiled with the `server` feature.

#![allow(dead_code)]

use chrono::NaiveDate;
use game_catalog::{Game, GameId};

/// The catalog shipped in `assets/data`.
pub const SAMPLE_CATALOG: &str = include_str!("../../assets/data/juegos.json");

/// Number of games in [`SAMPLE_CATALOG`].
pub const SAMPLE_GAMES: usize = 8;

/// A game with the fields the assertions care about; the rest are filler.
pub fn game(id: GameId, name: &str, rating: f64, price: Option<f64>) -> Game {
    Game {
        id,
        name: name.to_string(),
        developer: "Test Studio".to_string(),
        category: "Puzzle".to_string(),
        platforms: vec!["PC".to_string()],
        is_free: price.is_none(),
        price: price.unwrap_or_default(),
        rating,
        release_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap_or_default(),
    }
}

/// Three-game collection from the statistics scenario: a free 4.5, then
/// two paid 4.8s at 20 and 10.
pub fn tie_scenario() -> Vec<Game> {
    vec![
        game(1, "Primero", 4.5, None),
        game(2, "Segundo", 4.8, Some(20.0)),
        game(3, "Tercero", 4.8, Some(10.0)),
    ]
}

/// Ids of a result list, in order.
pub fn ids(games: &[Game]) -> Vec<GameId> {
    games.iter().map(|g| g.id).collect()
}

#[cfg(feature = "server")]
pub use server::TestApp;

#[cfg(feature = "server")]
mod server {
    use std::sync::Arc;

    use axum_test::TestServer;
    use game_catalog::server::{AppState, router};
    use game_catalog::{CatalogDocument, CatalogStore, Game};

    /// Router over a pre-populated store, driven through axum-test.
    pub struct TestApp {
        pub server: TestServer,
        pub store: Arc<CatalogStore>,
    }

    impl TestApp {
        /// App over the sample catalog.
        pub fn new() -> anyhow::Result<Self> {
            let document: CatalogDocument = serde_json::from_str(super::SAMPLE_CATALOG)?;
            Self::with_games(document.games)
        }

        pub fn with_games(games: Vec<Game>) -> anyhow::Result<Self> {
            Self::with_store(Arc::new(CatalogStore::with_games(games)))
        }

        pub fn with_store(store: Arc<CatalogStore>) -> anyhow::Result<Self> {
            let server = TestServer::new(router(AppState::new(Arc::clone(&store))))?;
            Ok(Self { server, store })
        }
    }
}
