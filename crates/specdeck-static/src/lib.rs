//! Static hub generator for specdeck.
//!
//! Builds a self-contained hub page, assets, and source manifest that any
//! static file server can host.

pub mod builder;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
