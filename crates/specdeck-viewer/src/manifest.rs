//! Machine-readable manifest of the documentation sources.
//!
//! Served at `/sources.json` by the dev server and written next to the
//! page by the static builder, so other tooling can discover the same
//! catalog the hub renders.

use serde::Serialize;
use specdeck_catalog::{Catalog, DocSource};

/// The `sources.json` document.
#[derive(Debug, Clone, Serialize)]
pub struct SourceManifest {
    pub title: String,
    pub sources: Vec<DocSource>,
}

impl SourceManifest {
    pub fn new(title: impl Into<String>, catalog: &Catalog) -> Self {
        Self {
            title: title.into(),
            sources: catalog.sources().to_vec(),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
