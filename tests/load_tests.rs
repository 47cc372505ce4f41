//! Integration tests for the one-time catalog load.
//!
//! File sources are written to a temp dir; HTTP sources are served by a
//! local axum listener.

mod common;

use std::time::Duration;

use common::{SAMPLE_CATALOG, SAMPLE_GAMES, ids};
use game_catalog::{CatalogStore, LoadStatus, Source, StatisticsPanel};
use tempfile::TempDir;

fn write_catalog(dir: &TempDir, contents: &str) -> anyhow::Result<Source> {
    let path = dir.path().join("juegos.json");
    std::fs::write(&path, contents)?;
    Ok(Source::File(path))
}

/// Wait until the store leaves `Pending`.
async fn settled(store: &CatalogStore) -> anyhow::Result<LoadStatus> {
    let mut watcher = store.status_watcher();
    let done = watcher.wait_for(|s| !s.is_pending());
    let status = tokio::time::timeout(Duration::from_secs(5), done).await??;
    Ok(status.clone())
}

#[tokio::test]
async fn test_load_from_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let source = write_catalog(&dir, SAMPLE_CATALOG)?;

    let store = CatalogStore::new();
    let status = store.load(&source).await;

    assert_eq!(status, LoadStatus::Loaded { games: SAMPLE_GAMES });
    assert_eq!(store.snapshot().len(), SAMPLE_GAMES);
    assert_eq!(
        store.find_by_id(3).current().map(|g| g.name),
        Some("Elden Ring".to_string())
    );

    Ok(())
}

#[tokio::test]
async fn test_malformed_document_leaves_store_empty() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let source = write_catalog(&dir, r#"{ "juegos": [ { "id": 1, "nombre": "Sin campos" } ] }"#)?;

    let store = CatalogStore::new();
    let status = store.load(&source).await;

    match status {
        LoadStatus::Failed { reason } => assert!(reason.contains("malformed")),
        other => anyhow::bail!("expected failed load, got {:?}", other),
    }
    assert!(store.snapshot().is_empty());
    assert_eq!(StatisticsPanel::init(&store).statistics().total_games, 0);

    Ok(())
}

#[tokio::test]
async fn test_second_load_is_ignored() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let source = write_catalog(&dir, SAMPLE_CATALOG)?;

    let store = CatalogStore::new();
    store.load(&source).await;
    let again = store.load(&Source::parse("missing/juegos.json")).await;

    assert_eq!(again, LoadStatus::Loaded { games: SAMPLE_GAMES });
    assert_eq!(store.snapshot().len(), SAMPLE_GAMES);

    Ok(())
}

#[tokio::test]
async fn test_spawn_load_notifies_views() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let source = write_catalog(&dir, SAMPLE_CATALOG)?;

    let store = CatalogStore::spawn_load(source);
    let mut recent = store.most_recent(2);

    let status = settled(&store).await?;
    assert_eq!(status, LoadStatus::Loaded { games: SAMPLE_GAMES });

    // The view either already sees the collection or is notified of it
    let games = match recent.poll() {
        Some(games) => games,
        None => recent.current(),
    };
    assert_eq!(ids(&games), vec![8, 1]);

    Ok(())
}

#[cfg(all(feature = "fetch", feature = "server"))]
mod http {
    use super::*;

    use axum::{Router, routing::get};

    /// Serve `body` at `/data/juegos.json` on an ephemeral port.
    async fn serve(body: &'static str) -> anyhow::Result<String> {
        let app = Router::new().route(
            "/data/juegos.json",
            get(move || async move {
                ([(axum::http::header::CONTENT_TYPE, "application/json")], body)
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Ok(format!("http://{}/data/juegos.json", addr))
    }

    #[tokio::test]
    async fn test_load_over_http() -> anyhow::Result<()> {
        let url = serve(SAMPLE_CATALOG).await?;

        let store = CatalogStore::spawn_load(Source::parse(&url));
        let status = settled(&store).await?;

        assert_eq!(status, LoadStatus::Loaded { games: SAMPLE_GAMES });
        let stats = StatisticsPanel::init(&store);
        assert_eq!(stats.statistics().free_games, 3);
        assert_eq!(stats.statistics().paid_games, 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_http_not_found_is_absorbed() -> anyhow::Result<()> {
        let url = serve(SAMPLE_CATALOG).await?;
        let missing = url.replace("juegos.json", "otros.json");

        let store = CatalogStore::new();
        let status = store.load(&Source::parse(&missing)).await;

        assert!(status.is_failed());
        assert!(store.snapshot().is_empty());
        assert!(store.top_rated(6).current().is_empty());

        Ok(())
    }
}
