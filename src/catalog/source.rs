//! Where the static catalog resource comes from.

use std::fmt;
use std::path::PathBuf;
#[cfg(feature = "fetch")]
use std::time::Duration;

use crate::{Error, Result};

use super::types::CatalogDocument;

/// Request timeout for HTTP sources.
#[cfg(feature = "fetch")]
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Location of the catalog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Fetched with a single parameterless HTTP GET.
    Http(String),
    /// Read from the local filesystem.
    File(PathBuf),
}

impl Source {
    /// `http://` and `https://` strings are URLs, anything else is a path.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Http(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Fetch and parse the document. Called once per store.
    pub async fn fetch(&self) -> Result<CatalogDocument> {
        match self {
            Self::File(path) => {
                let bytes = tokio::fs::read(path).await.map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                CatalogDocument::from_slice(&bytes)
            }
            Self::Http(url) => fetch_http(url).await,
        }
    }
}

#[cfg(feature = "fetch")]
async fn fetch_http(url: &str) -> Result<CatalogDocument> {
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    CatalogDocument::from_slice(&bytes)
}

#[cfg(not(feature = "fetch"))]
async fn fetch_http(url: &str) -> Result<CatalogDocument> {
    Err(Error::UnsupportedSource(url.to_string()))
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<&str> for Source {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
