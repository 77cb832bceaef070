//! Development server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use specdeck_catalog::{ConfigError, HubConfig};
use specdeck_viewer::{HubAssets, HubPage, PageContext, SourceManifest};

use crate::livereload::{reload_client_script, ReloadHub, ReloadMessage};
use crate::watcher::{ConfigWatcher, WatchEvent};

/// Configuration for the hub development server.
#[derive(Debug, Clone)]
pub struct HubServerConfig {
    /// Path to the hub config file
    pub config_path: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for HubServerConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("specdeck.toml"),
            port: 7878,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Config watch error: {0}")]
    WatchError(String),

    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Shared server state.
struct ServerState {
    hub: HubConfig,
    page: HubPage,
    reload: ReloadHub,
}

/// Query parameters accepted by the hub page.
#[derive(Debug, Deserialize)]
struct HubQuery {
    source: Option<String>,
}

/// Hub development server.
pub struct HubServer {
    config: HubServerConfig,
}

impl HubServer {
    /// Create a new hub server.
    pub fn new(config: HubServerConfig) -> Self {
        Self { config }
    }

    /// Start the hub server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .expect("Invalid address");

        let hub = HubConfig::load(&self.config.config_path)?;
        tracing::info!("Serving {} documentation sources", hub.catalog.len());

        let state = Arc::new(RwLock::new(ServerState {
            hub,
            page: HubPage::new(),
            reload: ReloadHub::new(),
        }));

        // Watch the config so source list edits show up without a restart
        let (watcher, mut rx) = ConfigWatcher::new(&self.config.config_path)
            .map_err(|e| ServerError::WatchError(e.to_string()))?;

        // Spawn config watch handler
        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&state_clone, event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        // Build router
        let app = Router::new()
            .route("/", get(hub_page_handler))
            .route("/sources.json", get(manifest_handler))
            .route("/assets/hub.css", get(css_handler))
            .route("/assets/hub.js", get(js_handler))
            .route("/__reload", get(ws_handler))
            .route("/__reload.js", get(reload_script_handler))
            .with_state(state);

        tracing::info!("Starting hub server at http://{}", addr);

        // Open browser if configured
        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        // Start server
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Handle config watch events.
async fn handle_watch_event(state: &Arc<RwLock<ServerState>>, event: WatchEvent) {
    match event {
        WatchEvent::ConfigChanged(path) => {
            tracing::info!("Config changed: {}", path.display());

            match HubConfig::load(&path) {
                Ok(hub) => {
                    let mut state = state.write().await;
                    state.hub = hub;
                    state.reload.send(ReloadMessage::Reload);
                }
                Err(e) => {
                    // Keep serving the last good catalog
                    tracing::warn!("Ignoring config change: {}", e);
                }
            }
        }

        WatchEvent::Other(_) => {}
    }
}

/// Handler for the hub page.
async fn hub_page_handler(
    Query(query): Query<HubQuery>,
    State(state): State<Arc<RwLock<ServerState>>>,
) -> impl IntoResponse {
    let state = state.read().await;
    render_hub_page(&state, query.source)
}

/// Render the hub page for the dev server.
///
/// The router mounts assets and the reload script at the root, so the
/// page always links them under `/`. The configured `base_url` only
/// applies to the built site.
fn render_hub_page(state: &ServerState, source: Option<String>) -> Html<String> {
    let ctx = PageContext {
        title: state.hub.title.clone(),
        base_url: "/".to_string(),
        viewer_asset_base: state.hub.viewer_asset_base.clone(),
        selected: source,
        reload_script: Some("/__reload.js".to_string()),
    };

    match state.page.render(&state.hub.catalog, &ctx) {
        Ok(html) => Html(html),
        Err(e) => Html(format!("<p>Error rendering hub page: {}</p>", e)),
    }
}

/// Handler for the source manifest.
async fn manifest_handler(State(state): State<Arc<RwLock<ServerState>>>) -> impl IntoResponse {
    let state = state.read().await;

    Json(SourceManifest::new(
        state.hub.title.clone(),
        &state.hub.catalog,
    ))
}

/// Handler for the hub stylesheet.
async fn css_handler() -> impl IntoResponse {
    ([("content-type", "text/css")], HubAssets::css())
}

/// Handler for the hub selection script.
async fn js_handler() -> impl IntoResponse {
    ([("content-type", "application/javascript")], HubAssets::js())
}

/// Handler for the live reload WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<RwLock<ServerState>>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: Arc<RwLock<ServerState>>) {
    let (mut rx, active) = {
        let state = state.read().await;
        (state.reload.subscribe(), state.reload.subscriber_count())
    };
    tracing::debug!("Reload client connected ({} active)", active);

    // Send connected message
    let msg = serde_json::to_string(&ReloadMessage::Connected).unwrap();
    if socket.send(Message::Text(msg.into())).await.is_err() {
        return;
    }

    // Forward reload messages to the client
    while let Ok(reload_msg) = rx.recv().await {
        let json = serde_json::to_string(&reload_msg).unwrap();
        if socket.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }
}

/// Handler for the live reload client script.
async fn reload_script_handler() -> impl IntoResponse {
    (
        [("content-type", "application/javascript")],
        reload_client_script(),
    )
}
