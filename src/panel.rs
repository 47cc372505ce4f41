//! Statistics panel, the display-side consumer of the catalog.

use std::fmt;

use crate::Result;
use crate::catalog::{CatalogStore, Statistics, View};

/// Holds the latest statistics emitted by the store for display.
///
/// Subscribes once at [`StatisticsPanel::init`] and keeps the last value
/// until the subscription delivers a new one.
pub struct StatisticsPanel {
    view: View<Statistics>,
    state: Statistics,
}

impl StatisticsPanel {
    pub fn init(store: &CatalogStore) -> Self {
        let view = store.statistics();
        let state = view.current();
        Self { view, state }
    }

    /// Statistics currently on display.
    pub fn statistics(&self) -> &Statistics {
        &self.state
    }

    /// Wait for the next publication and take its statistics.
    pub async fn refresh(&mut self) -> Result<&Statistics> {
        self.state = self.view.changed().await?;
        Ok(&self.state)
    }

    /// Take new statistics if any were published. Returns whether the display changed.
    pub fn poll(&mut self) -> bool {
        match self.view.poll() {
            Some(stats) => {
                self.state = stats;
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for StatisticsPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.state;
        writeln!(f, "Total games:   {}", stats.total_games)?;
        writeln!(f, "Free games:    {}", stats.free_games)?;
        writeln!(f, "Paid games:    {}", stats.paid_games)?;
        match &stats.best_rated {
            Some(best) => writeln!(f, "Best rated:    {} ({:.1})", best.name, best.rating)?,
            None => writeln!(f, "Best rated:    -")?,
        }
        write!(f, "Average price: {:.2}", stats.average_price)
    }
}
