//! Property-based tests for the query layer.
//!
//! Collections are generated with small id and rating domains so that ties
//! and duplicates show up often.

mod common;

use chrono::NaiveDate;
use common::{ids, tie_scenario};
use game_catalog::catalog::query;
use game_catalog::{Game, GameFilter, RatedGame, Statistics};
use proptest::prelude::*;

const CATEGORIES: &[&str] = &["RPG", "Shooter", "Aventura", "Puzzle"];
const PLATFORMS: &[&str] = &["PC", "PlayStation 5", "Nintendo Switch", "Mobile"];

fn arb_game() -> impl Strategy<Value = Game> {
    (
        0..50u32,
        "[a-zA-Z ]{1,12}",
        "[a-zA-Z ]{1,12}",
        prop::sample::select(CATEGORIES),
        prop::sample::subsequence(PLATFORMS, 0..=PLATFORMS.len()),
        any::<bool>(),
        0u32..10_000,
        0u32..=50,
        0u32..3650,
    )
        .prop_map(
            |(id, name, developer, category, platforms, is_free, cents, tenths, days)| Game {
                id,
                name,
                developer,
                category: category.to_string(),
                platforms: platforms.into_iter().map(str::to_string).collect(),
                is_free,
                // Free games may still carry a listed price
                price: f64::from(cents) / 100.0,
                rating: f64::from(tenths) / 10.0,
                release_date: NaiveDate::from_ymd_opt(2015, 1, 1)
                    .and_then(|d| d.checked_add_days(chrono::Days::new(u64::from(days))))
                    .unwrap_or_default(),
            },
        )
}

fn arb_collection() -> impl Strategy<Value = Vec<Game>> {
    prop::collection::vec(arb_game(), 0..40)
}

proptest! {
    #[test]
    fn free_filter_partitions_collection(games in arb_collection()) {
        let free = query::filter_by_free(&games, true);
        let paid = query::filter_by_free(&games, false);

        prop_assert_eq!(free.len() + paid.len(), games.len());
        let all_free = free.iter().all(|g| g.is_free);
        let all_paid = paid.iter().all(|g| !g.is_free);
        prop_assert!(all_free);
        prop_assert!(all_paid);

        // Merging both halves back by position recovers the collection
        let mut merged: Vec<*const Game> = free
            .iter()
            .chain(paid.iter())
            .map(|g| *g as *const Game)
            .collect();
        merged.sort();
        let mut all: Vec<*const Game> = games.iter().map(|g| g as *const Game).collect();
        all.sort();
        prop_assert_eq!(merged, all);
    }

    #[test]
    fn statistics_counts_match_collection(games in arb_collection()) {
        let stats = query::statistics(&games);

        prop_assert_eq!(stats.total_games, games.len());
        prop_assert_eq!(stats.free_games + stats.paid_games, games.len());
        prop_assert_eq!(stats.best_rated.is_none(), games.is_empty());
        if stats.paid_games == 0 {
            prop_assert_eq!(stats.average_price, 0.0);
        }
    }

    #[test]
    fn best_rated_is_first_maximum(games in arb_collection()) {
        let stats = query::statistics(&games);
        let max = games.iter().map(|g| g.rating).fold(f64::NEG_INFINITY, f64::max);
        let first = games.iter().find(|g| g.rating == max);

        prop_assert_eq!(
            stats.best_rated,
            first.map(|g| RatedGame { name: g.name.clone(), rating: g.rating })
        );
    }

    #[test]
    fn average_price_lies_within_paid_prices(games in arb_collection()) {
        let stats = query::statistics(&games);
        let paid: Vec<f64> = games.iter().filter(|g| !g.is_free).map(|g| g.price).collect();

        if let (Some(lo), Some(hi)) = (
            paid.iter().copied().reduce(f64::min),
            paid.iter().copied().reduce(f64::max),
        ) {
            prop_assert!(stats.average_price >= lo - 1e-9);
            prop_assert!(stats.average_price <= hi + 1e-9);
        }
    }

    #[test]
    fn top_rated_has_bounded_length_and_order(games in arb_collection(), limit in 0usize..12) {
        let top = query::top_rated(&games, limit);

        prop_assert_eq!(top.len(), limit.min(games.len()));
        let ordered = top.windows(2).all(|w| match w {
            [a, b] => a.rating >= b.rating,
            _ => true,
        });
        prop_assert!(ordered);
    }

    #[test]
    fn most_recent_has_bounded_length_and_order(games in arb_collection(), limit in 0usize..12) {
        let recent = query::most_recent(&games, limit);

        prop_assert_eq!(recent.len(), limit.min(games.len()));
        let ordered = recent.windows(2).all(|w| match w {
            [a, b] => a.release_date >= b.release_date,
            _ => true,
        });
        prop_assert!(ordered);
    }

    #[test]
    fn price_range_only_returns_games_in_range(
        games in arb_collection(),
        min in 0.0f64..100.0,
        max in 0.0f64..100.0
    ) {
        let in_range = query::filter_by_price_range(&games, min, max);

        let within = in_range
            .iter()
            .all(|g| g.effective_price() >= min && g.effective_price() <= max);
        prop_assert!(within);
        let expected = games
            .iter()
            .filter(|g| g.effective_price() >= min && g.effective_price() <= max)
            .count();
        prop_assert_eq!(in_range.len(), expected);
        if min > max {
            prop_assert!(in_range.is_empty());
        }
    }

    #[test]
    fn zero_price_range_excludes_paid_games(games in arb_collection()) {
        let paid: Vec<Game> = games
            .into_iter()
            .filter(|g| !g.is_free && g.price > 0.0)
            .collect();

        prop_assert!(query::filter_by_price_range(&paid, 0.0, 0.0).is_empty());
    }

    #[test]
    fn free_games_count_as_zero_price(games in arb_collection()) {
        let free_count = games.iter().filter(|g| g.is_free).count();
        let zero = query::filter_by_price_range(&games, 0.0, 0.0);
        let only_free_or_zero = zero.iter().all(|g| g.is_free || g.price == 0.0);

        prop_assert!(only_free_or_zero);
        prop_assert!(zero.iter().filter(|g| g.is_free).count() == free_count);

        let filtered = GameFilter::default().price_range(0.0, 0.0).apply(&games);
        prop_assert_eq!(filtered, zero);
    }

    #[test]
    fn search_results_contain_term(games in arb_collection(), term in "[a-zA-Z]{0,3}") {
        let needle = term.to_lowercase();
        let found = query::search(&games, &term);

        let all_match = found.iter().all(|g| {
            g.name.to_lowercase().contains(&needle)
                || g.developer.to_lowercase().contains(&needle)
                || g.category.to_lowercase().contains(&needle)
        });
        prop_assert!(all_match);
        if term.is_empty() {
            prop_assert_eq!(found.len(), games.len());
        }
    }

    #[test]
    fn find_by_id_returns_first_match(games in arb_collection(), id in 0..50u32) {
        let found = query::find_by_id(&games, id).map(|g| g as *const Game);
        let first = games.iter().find(|g| g.id == id).map(|g| g as *const Game);
        prop_assert_eq!(found, first);
    }

    #[test]
    fn queries_are_idempotent(games in arb_collection(), term in "[a-z]{0,2}", floor in 0.0f64..5.0) {
        prop_assert_eq!(query::statistics(&games), query::statistics(&games));
        prop_assert_eq!(query::search(&games, &term), query::search(&games, &term));
        prop_assert_eq!(
            query::filter_by_min_rating(&games, floor),
            query::filter_by_min_rating(&games, floor)
        );
        prop_assert_eq!(query::top_rated(&games, 6), query::top_rated(&games, 6));
        prop_assert_eq!(query::most_recent(&games, 4), query::most_recent(&games, 4));
    }
}

#[test]
fn scenario_tie_keeps_first_best_rated() {
    let games = tie_scenario();
    let stats = query::statistics(&games);

    assert_eq!(
        stats,
        Statistics {
            total_games: 3,
            free_games: 1,
            paid_games: 2,
            best_rated: Some(RatedGame {
                name: "Segundo".to_string(),
                rating: 4.8,
            }),
            average_price: 15.0,
        }
    );
    assert_eq!(ids(&query::to_owned(query::top_rated(&games, 6))), vec![2, 3, 1]);
}

#[test]
fn scenario_empty_collection() {
    assert_eq!(query::statistics(&[]), Statistics::default());
    assert!(query::search(&[], "anything").is_empty());
    assert!(query::filter_by_free(&[], true).is_empty());
    assert!(query::top_rated(&[], 6).is_empty());
}
