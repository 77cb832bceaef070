//! WebSocket-based live reload for the hub page.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Messages sent to connected hub pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReloadMessage {
    /// Full page reload
    Reload,

    /// Connection established
    Connected,
}

/// Hub for broadcasting reload messages to all connected clients.
#[derive(Debug, Clone)]
pub struct ReloadHub {
    sender: broadcast::Sender<ReloadMessage>,
}

impl ReloadHub {
    /// Create a new reload hub.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// Send a message to all connected clients.
    pub fn send(&self, msg: ReloadMessage) {
        // Ignore send errors (no receivers)
        let _ = self.sender.send(msg);
    }

    /// Subscribe to reload messages.
    pub fn subscribe(&self) -> broadcast::Receiver<ReloadMessage> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ReloadHub {
    fn default() -> Self {
        Self::new()
    }
}

/// The client-side reload script.
///
/// Connects back to the server that served the page, so the script works
/// whatever host and port the server was started on.
pub fn reload_client_script() -> &'static str {
    RELOAD_SCRIPT
}

const RELOAD_SCRIPT: &str = r#"
(function() {
  'use strict';

  const ws = new WebSocket('ws://' + location.host + '/__reload');
  let reconnectAttempts = 0;
  const maxReconnectAttempts = 10;

  ws.onopen = function() {
    console.log('[specdeck] Connected');
    reconnectAttempts = 0;
  };

  ws.onmessage = function(event) {
    const msg = JSON.parse(event.data);
    console.log('[specdeck]', msg.type);

    switch (msg.type) {
      case 'reload':
        location.reload();
        break;

      case 'connected':
        console.log('[specdeck] Server acknowledged connection');
        break;
    }
  };

  ws.onclose = function() {
    console.log('[specdeck] Disconnected');
    if (reconnectAttempts < maxReconnectAttempts) {
      reconnectAttempts++;
      setTimeout(function() {
        console.log('[specdeck] Reconnecting...');
        location.reload();
      }, 1000 * reconnectAttempts);
    }
  };

  ws.onerror = function(e) {
    console.error('[specdeck] WebSocket error:', e);
  };
})();
"#;
