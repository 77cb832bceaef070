//! Config scaffolding command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'specdeck dev' to start the hub server.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Specdeck Configuration

[hub]
# Title shown in the hub header
title = "API Documentation"

# Base URL (for deployment under a subpath)
base_url = "/"

[viewer]
# Where the Swagger UI assets are fetched from
asset_base = "https://unpkg.com/swagger-ui-dist@5.17.14"

# Documentation sources, in the order they appear in the picker.
# The first entry is shown when the hub loads.

[[sources]]
name = "Main Service"
url = "https://dev.retrades.trade/api/main/v1/api-docs"

[[sources]]
name = "Feedback Notification"
url = "https://dev.retrades.trade/api/feedback-notification/v1/api-docs"

[[sources]]
name = "Storage Service"
url = "https://dev.retrades.trade/api/storage/v1/api-docs"

[[sources]]
name = "Voucher Service"
url = "https://dev.retrades.trade/api/voucher/v1/api-docs"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use specdeck_catalog::{builtin_sources, HubConfig};
    use tempfile::tempdir;

    #[test]
    fn default_config_loads_as_builtin_catalog() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("specdeck.toml");

        run(&path, false).unwrap();

        let hub = HubConfig::load(&path).unwrap();
        assert_eq!(hub.catalog.sources(), builtin_sources().as_slice());
    }

    #[test]
    fn refuses_to_overwrite_without_yes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("specdeck.toml");
        fs::write(&path, "# custom").unwrap();

        run(&path, false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# custom");
    }

    #[test]
    fn overwrites_with_yes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("specdeck.toml");
        fs::write(&path, "# custom").unwrap();

        run(&path, true).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Main Service"));
    }
}
