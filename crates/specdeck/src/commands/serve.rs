//! Preview server command.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::ServeDir;

/// Run the serve command.
///
/// Previews a built hub from `dir`. The directory must contain the
/// `index.html` that `specdeck build` writes.
pub async fn run(port: u16, dir: PathBuf) -> Result<()> {
    if !dir.join("index.html").exists() {
        anyhow::bail!(
            "No hub found in {}. Run 'specdeck build' first.",
            dir.display()
        );
    }

    match read_source_count(&dir) {
        Some(count) => tracing::info!("Previewing hub with {} documentation sources", count),
        None => tracing::warn!("No readable sources.json in {}", dir.display()),
    }

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    tracing::info!("Serving {} at http://{}", dir.display(), addr);

    let app = Router::new().fallback_service(ServeDir::new(&dir));

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Open browser
    let url = format!("http://{}", addr);
    let _ = open::that(&url);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Number of sources in the built hub's manifest, if it is readable.
fn read_source_count(dir: &Path) -> Option<usize> {
    let content = fs::read_to_string(dir.join("sources.json")).ok()?;
    let manifest: serde_json::Value = serde_json::from_str(&content).ok()?;

    Some(manifest.get("sources")?.as_array()?.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn refuses_missing_directory() {
        let err = run(0, PathBuf::from("/nonexistent/dist"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("specdeck build"));
    }

    #[tokio::test]
    async fn refuses_directory_without_built_hub() {
        let temp = tempdir().unwrap();

        let err = run(0, temp.path().to_path_buf()).await.unwrap_err();

        assert!(err.to_string().contains("No hub found"));
    }

    #[test]
    fn counts_sources_from_manifest() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("sources.json"),
            r#"{"title": "Docs", "sources": [
                {"name": "Main Service", "url": "https://example.com/main"},
                {"name": "Storage Service", "url": "https://example.com/storage"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(read_source_count(temp.path()), Some(2));
    }

    #[test]
    fn missing_manifest_counts_nothing() {
        let temp = tempdir().unwrap();

        assert_eq!(read_source_count(temp.path()), None);
    }
}
