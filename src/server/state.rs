//! Application state management.

use std::sync::Arc;

use crate::catalog::{CatalogStore, Source};

use super::config::Config;

/// Shared application state.
#[derive(Clone, Debug)]
pub struct AppState {
    store: Arc<CatalogStore>,
}

impl AppState {
    /// Wrap an existing store.
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Start loading the configured catalog in the background.
    ///
    /// Handlers answer from the empty collection until the load publishes.
    pub fn from_config(config: &Config) -> Self {
        Self::spawn_load(config.catalog.source())
    }

    pub fn spawn_load(source: Source) -> Self {
        Self::new(CatalogStore::spawn_load(source))
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }
}
