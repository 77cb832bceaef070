//! Documentation source catalog for the specdeck hub.
//!
//! This crate defines the fixed, ordered list of documentation sources the
//! hub offers and the configuration file it is loaded from.

pub mod catalog;
pub mod config;
pub mod source;

pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, HubConfig, DEFAULT_VIEWER_ASSET_BASE};
pub use source::{builtin_sources, DocSource};
