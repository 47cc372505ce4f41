//! In-memory game catalog.
//!
//! The store holds the collection loaded once from a static resource and
//! publishes it to observers. The query functions derive views from a
//! snapshot of that collection; [`View`] re-runs one of them on every
//! publication.

pub mod query;
mod source;
mod store;
mod types;

pub use query::{DEFAULT_RECENT_LIMIT, DEFAULT_TOP_RATED_LIMIT, GameFilter};
pub use source::Source;
pub use store::{CatalogStore, Snapshot, View};
pub use types::{CatalogDocument, Game, GameId, LoadStatus, RatedGame, Statistics};
