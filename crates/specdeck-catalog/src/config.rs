//! Hub configuration loaded from specdeck.toml.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{Catalog, CatalogError};
use crate::source::{builtin_sources, DocSource};

/// Where the viewer assets are fetched from when no override is configured.
pub const DEFAULT_VIEWER_ASSET_BASE: &str = "https://unpkg.com/swagger-ui-dist@5.17.14";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid source list in {path}: {source}")]
    Catalog {
        path: String,
        #[source]
        source: CatalogError,
    },
}

/// File structure of specdeck.toml.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    hub: HubSection,

    #[serde(default)]
    viewer: ViewerSection,

    #[serde(default)]
    sources: Vec<DocSource>,
}

#[derive(Debug, Deserialize)]
struct HubSection {
    #[serde(default = "default_title")]
    title: String,

    #[serde(default = "default_base_url")]
    base_url: String,
}

impl Default for HubSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ViewerSection {
    #[serde(default = "default_asset_base")]
    asset_base: String,
}

impl Default for ViewerSection {
    fn default() -> Self {
        Self {
            asset_base: default_asset_base(),
        }
    }
}

fn default_title() -> String {
    "API Documentation".to_string()
}

fn default_base_url() -> String {
    "/".to_string()
}

fn default_asset_base() -> String {
    DEFAULT_VIEWER_ASSET_BASE.to_string()
}

/// Resolved hub configuration.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Title shown in the hub header and page title
    pub title: String,

    /// Base URL the built site is served under
    pub base_url: String,

    /// Where the viewer assets (swagger-ui.css, swagger-ui-bundle.js) live
    pub viewer_asset_base: String,

    /// The documentation sources, in display order
    pub catalog: Catalog,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: default_base_url(),
            viewer_asset_base: default_asset_base(),
            catalog: Catalog::builtin(),
        }
    }
}

impl HubConfig {
    /// Load configuration from the given path.
    ///
    /// A missing file yields the built-in defaults. A file that exists but
    /// cannot be parsed or validated is an error. An empty `[[sources]]`
    /// list falls back to the built-in sources.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let display = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: display.clone(),
            message: e.to_string(),
        })?;

        let file: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: display.clone(),
            message: e.to_string(),
        })?;

        let sources = if file.sources.is_empty() {
            builtin_sources()
        } else {
            file.sources
        };

        let catalog = Catalog::new(sources).map_err(|source| ConfigError::Catalog {
            path: display,
            source,
        })?;

        Ok(Self {
            title: file.hub.title,
            base_url: file.hub.base_url,
            viewer_asset_base: file.viewer.asset_base.trim_end_matches('/').to_string(),
            catalog,
        })
    }
}
