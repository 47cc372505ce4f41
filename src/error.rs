//! Unified error type for the game-catalog library.
//!
//! Collection observers never see these: the store turns a failed load into
//! [`LoadStatus::Failed`](crate::catalog::LoadStatus) and keeps the empty
//! collection. They surface from the lower-level calls such as
//! [`Source::fetch`](crate::catalog::Source::fetch) and
//! [`View::changed`](crate::catalog::View::changed).

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for all game-catalog operations.
///
/// # Example
///
/// ```ignore
/// use game_catalog::{Result, Source};
///
/// async fn count_games(source: &Source) -> Result<usize> {
///     let document = source.fetch().await?;
///     Ok(document.games.len())
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a file source failed.
    #[error("failed to read catalog file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP fetch failed or returned a non-success status.
    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog document is malformed.
    #[error("malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),

    /// An HTTP source was given to a build without the `fetch` feature.
    #[error("unsupported catalog source '{0}' (enable the `fetch` feature for HTTP)")]
    UnsupportedSource(String),

    /// The store was dropped while a view was waiting for a change.
    #[error("catalog store has been closed")]
    StoreClosed,
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if the error came from reading or fetching the resource.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Io { .. } => true,
            #[cfg(feature = "fetch")]
            Self::Http(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if the resource was reachable but not a valid catalog.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}
