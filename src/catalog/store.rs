//! Observable catalog store backed by a `tokio::sync::watch` channel.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

use crate::logging::{debug, info, trace, warn};
use crate::{Error, Result};

use super::query::{self, GameFilter};
use super::source::Source;
use super::types::{Game, GameId, LoadStatus, Statistics};

/// Immutable collection snapshot shared between the store and its readers.
pub type Snapshot = Arc<[Game]>;

type Derive<T> = Arc<dyn Fn(&[Game]) -> T + Send + Sync>;

/// In-memory catalog with a single writer (the load) and any number of observers.
pub struct CatalogStore {
    games: watch::Sender<Snapshot>,
    status: watch::Sender<LoadStatus>,
    load_started: AtomicBool,
}

impl CatalogStore {
    /// An empty store that has not loaded anything yet.
    pub fn new() -> Self {
        let (games, _) = watch::channel(Snapshot::from(Vec::new()));
        let (status, _) = watch::channel(LoadStatus::Pending);
        Self {
            games,
            status,
            load_started: AtomicBool::new(false),
        }
    }

    /// A store already holding `games`. Further loads are ignored.
    pub fn with_games(games: Vec<Game>) -> Self {
        let store = Self::new();
        store.load_started.store(true, Ordering::SeqCst);
        store.publish(games);
        store
    }

    /// Create a store and load `source` on a background task.
    ///
    /// Returns immediately; observers see the empty collection until the
    /// load publishes. Must be called from within a tokio runtime.
    pub fn spawn_load(source: Source) -> Arc<Self> {
        let store = Arc::new(Self::new());
        let loader = Arc::clone(&store);
        tokio::spawn(async move {
            loader.load(&source).await;
        });
        store
    }

    /// Fetch `source` once and publish the collection.
    ///
    /// A failure is absorbed: the collection stays empty, the reason is
    /// logged and recorded in [`LoadStatus::Failed`]. Calls after the first
    /// return the current status without fetching.
    pub async fn load(&self, source: &Source) -> LoadStatus {
        if self.load_started.swap(true, Ordering::SeqCst) {
            debug!(source = %source, "catalog already loaded, ignoring");
            return self.status();
        }

        info!(source = %source, "loading catalog");
        match source.fetch().await {
            Ok(document) => self.publish(document.games),
            Err(err) => {
                warn!(source = %source, error = %err, "catalog load failed, keeping empty collection");
                self.status.send_replace(LoadStatus::Failed {
                    reason: err.to_string(),
                });
            }
        }
        self.status()
    }

    fn publish(&self, games: Vec<Game>) {
        let mut seen = HashSet::with_capacity(games.len());
        for game in &games {
            if !seen.insert(game.id) {
                warn!(id = game.id, name = %game.name, "duplicate game id in catalog");
            }
        }

        let count = games.len();
        self.games.send_replace(Snapshot::from(games));
        self.status.send_replace(LoadStatus::Loaded { games: count });
        info!(games = count, "catalog published");
    }

    /// Live receiver of the collection.
    pub fn observe(&self) -> watch::Receiver<Snapshot> {
        self.games.subscribe()
    }

    /// Latest collection snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.games.borrow())
    }

    pub fn status(&self) -> LoadStatus {
        self.status.borrow().clone()
    }

    pub fn status_watcher(&self) -> watch::Receiver<LoadStatus> {
        self.status.subscribe()
    }

    /// Observable projection of the collection through `derive`.
    pub fn view<T, F>(&self, derive: F) -> View<T>
    where
        F: Fn(&[Game]) -> T + Send + Sync + 'static,
    {
        View {
            games: self.observe(),
            derive: Arc::new(derive),
        }
    }

    pub fn all(&self) -> View<Vec<Game>> {
        self.view(|games| games.to_vec())
    }

    pub fn find_by_id(&self, id: GameId) -> View<Option<Game>> {
        self.view(move |games| query::find_by_id(games, id).cloned())
    }

    pub fn search(&self, term: impl Into<String>) -> View<Vec<Game>> {
        let term = term.into();
        self.view(move |games| query::to_owned(query::search(games, &term)))
    }

    pub fn filter_by_category(&self, category: impl Into<String>) -> View<Vec<Game>> {
        let category = category.into();
        self.view(move |games| query::to_owned(query::filter_by_category(games, &category)))
    }

    pub fn filter_by_platform(&self, platform: impl Into<String>) -> View<Vec<Game>> {
        let platform = platform.into();
        self.view(move |games| query::to_owned(query::filter_by_platform(games, &platform)))
    }

    pub fn filter_by_free(&self, is_free: bool) -> View<Vec<Game>> {
        self.view(move |games| query::to_owned(query::filter_by_free(games, is_free)))
    }

    pub fn filter_by_min_rating(&self, min_rating: f64) -> View<Vec<Game>> {
        self.view(move |games| query::to_owned(query::filter_by_min_rating(games, min_rating)))
    }

    pub fn filter_by_price_range(&self, min: f64, max: f64) -> View<Vec<Game>> {
        self.view(move |games| query::to_owned(query::filter_by_price_range(games, min, max)))
    }

    pub fn filter(&self, filter: GameFilter) -> View<Vec<Game>> {
        self.view(move |games| query::to_owned(filter.apply(games)))
    }

    /// Pass [`query::DEFAULT_TOP_RATED_LIMIT`] for the usual landing-page list.
    pub fn top_rated(&self, limit: usize) -> View<Vec<Game>> {
        self.view(move |games| query::to_owned(query::top_rated(games, limit)))
    }

    /// Pass [`query::DEFAULT_RECENT_LIMIT`] for the usual landing-page list.
    pub fn most_recent(&self, limit: usize) -> View<Vec<Game>> {
        self.view(move |games| query::to_owned(query::most_recent(games, limit)))
    }

    pub fn statistics(&self) -> View<Statistics> {
        self.view(query::statistics)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogStore")
            .field("games", &self.games.borrow().len())
            .field("status", &*self.status.borrow())
            .finish()
    }
}

/// A derived view that follows the store.
///
/// [`View::current`] evaluates against the latest snapshot; [`View::changed`]
/// waits for the next publication and evaluates against it.
pub struct View<T> {
    games: watch::Receiver<Snapshot>,
    derive: Derive<T>,
}

impl<T> View<T> {
    /// Evaluate against the latest snapshot.
    pub fn current(&self) -> T {
        let snapshot = Arc::clone(&self.games.borrow());
        (self.derive)(&snapshot)
    }

    /// Wait for the next publication and evaluate against it.
    pub async fn changed(&mut self) -> Result<T> {
        self.games.changed().await.map_err(|_| Error::StoreClosed)?;
        trace!("catalog view notified");
        let snapshot = Arc::clone(&self.games.borrow_and_update());
        Ok((self.derive)(&snapshot))
    }

    /// Evaluate only if a publication arrived since the last read.
    pub fn poll(&mut self) -> Option<T> {
        match self.games.has_changed() {
            Ok(true) => {
                let snapshot = Arc::clone(&self.games.borrow_and_update());
                Some((self.derive)(&snapshot))
            }
            _ => None,
        }
    }
}

impl<T> Clone for View<T> {
    fn clone(&self) -> Self {
        Self {
            games: self.games.clone(),
            derive: Arc::clone(&self.derive),
        }
    }
}
