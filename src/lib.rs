//! Observable in-memory game catalog.
//!
//! The catalog is loaded once from a static JSON resource and then searched,
//! filtered and summarized entirely in memory.
//!
//! # Quick Start
//!
//! ```ignore
//! use game_catalog::prelude::*;
//!
//! let store = CatalogStore::new();
//! store.load(&Source::parse("assets/data/juegos.json")).await;
//!
//! let best = store.top_rated(DEFAULT_TOP_RATED_LIMIT).current();
//! let panel = StatisticsPanel::init(&store);
//! println!("{panel}");
//! ```
//!
//! # Modules
//!
//! - [`catalog`] - Store, query layer and resource sources (always available)
//! - [`panel`] - Statistics panel that renders the aggregate view
//! - [`server`] - Read-only HTTP API over the catalog (requires `server` feature)
//!
//! # Feature Flags
//!
//! - `fetch` - Load catalogs over HTTP (enabled by default)
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `cli` - Enable the command-line interface binary
//! - `server` - Enable the HTTP API server
//! - `full` - Enable all features

mod logging;

pub mod catalog;
pub mod panel;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export catalog types at crate root for convenience
pub use catalog::{
    CatalogDocument, CatalogStore, Game, GameFilter, GameId, LoadStatus, RatedGame, Snapshot,
    Source, Statistics, View,
};
pub use panel::StatisticsPanel;
