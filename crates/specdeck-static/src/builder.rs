//! Static hub builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use specdeck_catalog::HubConfig;
use specdeck_viewer::{HubAssets, HubPage, PageContext, SourceManifest};

/// Configuration for building the static hub.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            minify: true,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of documentation sources in the hub
    pub sources: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to serialize manifest: {0}")]
    ManifestError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static hub builder.
pub struct SiteBuilder {
    hub: HubConfig,
    config: BuildConfig,
    page: HubPage,
}

impl SiteBuilder {
    /// Create a new builder for the given hub.
    pub fn new(hub: HubConfig, config: BuildConfig) -> Self {
        Self {
            hub,
            config,
            page: HubPage::new(),
        }
    }

    /// Build the static hub.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        // Ensure output directory exists
        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        self.write_page()?;
        self.write_assets()?;
        self.write_manifest()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            sources: self.hub.catalog.len(),
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Render and write the hub page.
    fn write_page(&self) -> Result<(), BuildError> {
        let ctx = PageContext {
            title: self.hub.title.clone(),
            base_url: self.hub.base_url.clone(),
            viewer_asset_base: self.hub.viewer_asset_base.clone(),
            selected: None,
            reload_script: None,
        };

        let html = self
            .page
            .render(&self.hub.catalog, &ctx)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        let path = self.config.output_dir.join("index.html");
        fs::write(&path, html).map_err(|e| BuildError::WriteError(e.to_string()))?;
        tracing::debug!("Wrote {}", path.display());

        Ok(())
    }

    /// Write the hub stylesheet and selection script.
    fn write_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = HubAssets::css();
        let css = if self.config.minify {
            HubAssets::minify_css(&css).unwrap_or(css)
        } else {
            css
        };
        let css_path = assets_dir.join("hub.css");
        fs::write(&css_path, css).map_err(|e| BuildError::WriteError(e.to_string()))?;
        tracing::debug!("Wrote {}", css_path.display());

        let js_path = assets_dir.join("hub.js");
        fs::write(&js_path, HubAssets::js()).map_err(|e| BuildError::WriteError(e.to_string()))?;
        tracing::debug!("Wrote {}", js_path.display());

        Ok(())
    }

    /// Write the machine-readable source manifest.
    fn write_manifest(&self) -> Result<(), BuildError> {
        let manifest = SourceManifest::new(self.hub.title.clone(), &self.hub.catalog);
        let json = manifest
            .to_json()
            .map_err(|e| BuildError::ManifestError(e.to_string()))?;

        let path = self.config.output_dir.join("sources.json");
        fs::write(&path, json).map_err(|e| BuildError::WriteError(e.to_string()))?;
        tracing::debug!("Wrote {}", path.display());

        Ok(())
    }
}
