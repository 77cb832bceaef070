//! Static hub build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use specdeck_catalog::HubConfig;
use specdeck_static::{BuildConfig, SiteBuilder};

/// Run the build command.
pub fn run(config_path: &Path, output: PathBuf, minify: bool) -> Result<()> {
    tracing::info!("Building static hub...");

    let hub = HubConfig::load(config_path)?;

    let config = BuildConfig {
        output_dir: output,
        minify,
    };

    let result = SiteBuilder::new(hub, config).build()?;

    tracing::info!(
        "Built hub with {} sources in {}ms",
        result.sources,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
