//! Hub server command.

use std::path::Path;

use anyhow::Result;
use specdeck_server::{HubServer, HubServerConfig};

/// Run the hub server.
pub async fn run(config_path: &Path, port: u16, open: bool) -> Result<()> {
    tracing::info!("Starting hub server on port {}", port);

    let config = HubServerConfig {
        config_path: config_path.to_path_buf(),
        port,
        open,
        ..Default::default()
    };

    HubServer::new(config).start().await?;

    Ok(())
}
