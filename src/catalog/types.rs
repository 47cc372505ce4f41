//! Data types for the catalog module.
//!
//! Field names on the wire follow the static resource (`nombre`,
//! `esGratis`, ...); the Rust names are the English equivalents.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Game identifier, unique across a collection.
pub type GameId = u32;

/// One record of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "desarrollador")]
    pub developer: String,

    #[serde(rename = "categoria")]
    pub category: String,

    /// Platform names, in the order the resource lists them.
    #[serde(rename = "plataformas", default)]
    pub platforms: Vec<String>,

    #[serde(rename = "esGratis")]
    pub is_free: bool,

    /// Listed price. Not meaningful when `is_free` is set; use
    /// [`Game::effective_price`] for comparisons.
    #[serde(rename = "precio", default)]
    pub price: f64,

    pub rating: f64,

    #[serde(rename = "fechaLanzamiento", deserialize_with = "deserialize_release_date")]
    pub release_date: NaiveDate,
}

impl Game {
    /// Price used for range filters: the listed price of a paid game, 0 for a free one.
    pub fn effective_price(&self) -> f64 {
        if self.is_free { 0.0 } else { self.price }
    }

    /// Whether the game is available on `platform` (exact match).
    pub fn runs_on(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }
}

/// Accepts `2023-05-12`, local datetimes such as `2023-05-12T10:00:00`, and
/// RFC 3339 timestamps. Only the calendar date is kept.
fn deserialize_release_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M") {
        return Ok(dt.date());
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| serde::de::Error::custom(format!("invalid release date '{}'", raw)))
}

/// The static resource: `{ "juegos": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(rename = "juegos")]
    pub games: Vec<Game>,
}

impl CatalogDocument {
    /// Parse a catalog document from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> crate::Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Name and rating of the best-rated game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedGame {
    #[serde(rename = "nombre")]
    pub name: String,
    pub rating: f64,
}

/// Aggregate statistics over a collection. Always derived, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(rename = "totalJuegos")]
    pub total_games: usize,

    #[serde(rename = "juegosGratis")]
    pub free_games: usize,

    #[serde(rename = "juegosPago")]
    pub paid_games: usize,

    /// `None` only for the empty collection.
    #[serde(rename = "mejorRating")]
    pub best_rated: Option<RatedGame>,

    /// Mean price over paid games, 0 when there are none.
    #[serde(rename = "promedioPrecio")]
    pub average_price: f64,
}

/// Outcome of the one-time catalog load.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadStatus {
    /// No load has completed yet.
    #[default]
    Pending,
    /// The collection was published.
    Loaded { games: usize },
    /// The load failed; the collection stays empty.
    Failed { reason: String },
}

impl LoadStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
