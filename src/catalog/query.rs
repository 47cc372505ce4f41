//! Pure derivations over a collection snapshot.
//!
//! Every function re-scans the full slice it is given. Results borrow from
//! the snapshot and keep collection order unless the operation sorts.

use super::types::{Game, GameId, RatedGame, Statistics};

/// Default length of [`top_rated`].
pub const DEFAULT_TOP_RATED_LIMIT: usize = 6;

/// Default length of [`most_recent`].
pub const DEFAULT_RECENT_LIMIT: usize = 4;

/// First game with the given identifier.
pub fn find_by_id(games: &[Game], id: GameId) -> Option<&Game> {
    games.iter().find(|g| g.id == id)
}

/// Case-insensitive substring match on name, developer or category.
pub fn search<'a>(games: &'a [Game], term: &str) -> Vec<&'a Game> {
    let term = term.to_lowercase();
    games
        .iter()
        .filter(|g| {
            g.name.to_lowercase().contains(&term)
                || g.developer.to_lowercase().contains(&term)
                || g.category.to_lowercase().contains(&term)
        })
        .collect()
}

/// Case-insensitive exact match on category.
pub fn filter_by_category<'a>(games: &'a [Game], category: &str) -> Vec<&'a Game> {
    let category = category.to_lowercase();
    games
        .iter()
        .filter(|g| g.category.to_lowercase() == category)
        .collect()
}

pub fn filter_by_platform<'a>(games: &'a [Game], platform: &str) -> Vec<&'a Game> {
    games.iter().filter(|g| g.runs_on(platform)).collect()
}

pub fn filter_by_free(games: &[Game], is_free: bool) -> Vec<&Game> {
    games.iter().filter(|g| g.is_free == is_free).collect()
}

pub fn filter_by_min_rating(games: &[Game], min_rating: f64) -> Vec<&Game> {
    games.iter().filter(|g| g.rating >= min_rating).collect()
}

/// Games whose effective price lies in `[min, max]`. `min > max` is not
/// rejected and simply matches nothing.
pub fn filter_by_price_range(games: &[Game], min: f64, max: f64) -> Vec<&Game> {
    games
        .iter()
        .filter(|g| {
            let price = g.effective_price();
            price >= min && price <= max
        })
        .collect()
}

/// Highest ratings first, at most `limit` games. Ties keep collection order.
pub fn top_rated(games: &[Game], limit: usize) -> Vec<&Game> {
    let mut sorted: Vec<&Game> = games.iter().collect();
    sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    sorted.truncate(limit);
    sorted
}

/// Latest release dates first, at most `limit` games. Ties keep collection order.
pub fn most_recent(games: &[Game], limit: usize) -> Vec<&Game> {
    let mut sorted: Vec<&Game> = games.iter().collect();
    sorted.sort_by(|a, b| b.release_date.cmp(&a.release_date));
    sorted.truncate(limit);
    sorted
}

/// Aggregate statistics.
///
/// The best-rated game is only replaced by a strictly higher rating, so the
/// earliest of several equally rated games wins.
pub fn statistics(games: &[Game]) -> Statistics {
    let free_games = games.iter().filter(|g| g.is_free).count();

    let best = games.iter().fold(None::<&Game>, |best, game| match best {
        Some(b) if game.rating > b.rating => Some(game),
        Some(b) => Some(b),
        None => Some(game),
    });

    let (paid_total, paid_games) = games
        .iter()
        .filter(|g| !g.is_free)
        .fold((0.0, 0usize), |(sum, n), g| (sum + g.price, n + 1));

    let average_price = if paid_games > 0 {
        paid_total / paid_games as f64
    } else {
        0.0
    };

    Statistics {
        total_games: games.len(),
        free_games,
        paid_games,
        best_rated: best.map(|g| RatedGame {
            name: g.name.clone(),
            rating: g.rating,
        }),
        average_price,
    }
}

/// Conjunction of the individual filters. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameFilter {
    pub category: Option<String>,
    pub platform: Option<String>,
    pub is_free: Option<bool>,
    pub min_rating: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl GameFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn free(mut self, is_free: bool) -> Self {
        self.is_free = Some(is_free);
        self
    }

    pub fn min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn price_range(mut self, min: f64, max: f64) -> Self {
        self.min_price = Some(min);
        self.max_price = Some(max);
        self
    }

    /// Returns `true` if no criterion is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply every set criterion in turn. A single missing price bound is open.
    pub fn apply<'a>(&self, games: &'a [Game]) -> Vec<&'a Game> {
        let category = self.category.as_deref().map(str::to_lowercase);
        let min_price = self.min_price.unwrap_or(f64::NEG_INFINITY);
        let max_price = self.max_price.unwrap_or(f64::INFINITY);
        let has_price = self.min_price.is_some() || self.max_price.is_some();

        games
            .iter()
            .filter(|g| {
                category
                    .as_deref()
                    .is_none_or(|c| g.category.to_lowercase() == c)
            })
            .filter(|g| self.platform.as_deref().is_none_or(|p| g.runs_on(p)))
            .filter(|g| self.is_free.is_none_or(|free| g.is_free == free))
            .filter(|g| self.min_rating.is_none_or(|r| g.rating >= r))
            .filter(|g| {
                let price = g.effective_price();
                !has_price || (price >= min_price && price <= max_price)
            })
            .collect()
    }
}

/// Clone a borrowed result into an owned list.
pub fn to_owned(games: Vec<&Game>) -> Vec<Game> {
    games.into_iter().cloned().collect()
}
