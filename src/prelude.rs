//! Convenient re-exports for common usage patterns.
//!
//! # Example
//!
//! ```ignore
//! use game_catalog::prelude::*;
//!
//! let store = CatalogStore::spawn_load(Source::parse("https://example.org/data/juegos.json"));
//! let mut free = store.filter_by_free(true);
//! let games = free.changed().await?;
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Store, views and sources
pub use crate::catalog::{CatalogStore, Snapshot, Source, View};

// Records and derived values
pub use crate::catalog::{CatalogDocument, Game, GameId, LoadStatus, RatedGame, Statistics};

// Query layer
pub use crate::catalog::query;
pub use crate::catalog::{DEFAULT_RECENT_LIMIT, DEFAULT_TOP_RATED_LIMIT, GameFilter};

// Presentation
pub use crate::panel::StatisticsPanel;
