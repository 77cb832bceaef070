//! Hub page rendering for the external documentation viewer.
//!
//! Turns a documentation source catalog into the HTML page, stylesheet,
//! and script that embed Swagger UI and wire the source picker to it.

pub mod assets;
pub mod manifest;
pub mod page;

pub use assets::HubAssets;
pub use manifest::SourceManifest;
pub use page::{HubPage, PageContext};
