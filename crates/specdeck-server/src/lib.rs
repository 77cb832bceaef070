//! Development server for the specdeck hub.
//!
//! Serves the hub page and its assets, watches the hub config, and pushes
//! WebSocket-based live reloads when the source catalog changes.

pub mod livereload;
pub mod server;
pub mod watcher;

pub use livereload::{ReloadHub, ReloadMessage};
pub use server::{HubServer, HubServerConfig, ServerError};
pub use watcher::{ConfigWatcher, WatchEvent};
