//! Config file watching for live reload.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Events emitted by the config watcher.
#[derive(Debug, Clone)]
pub enum WatchEvent {
    /// The hub config file changed
    ConfigChanged(PathBuf),

    /// Another file in the config directory changed
    Other(PathBuf),
}

/// Watcher for the hub config file.
///
/// Watches the directory containing the config rather than the file itself,
/// so editors that save via rename are still seen and the watch survives the
/// file not existing yet.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    /// Create a new watcher for the given config path.
    ///
    /// Returns the watcher and a channel to receive events.
    pub fn new(
        config_path: &Path,
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let Some(config_name) = config_path.file_name().map(OsStr::to_os_string) else {
            return Err(std::io::Error::other("config path has no file name"));
        };

        let dir = match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        // Create the watcher
        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        if dir.exists() {
            watcher
                .watch(&dir, RecursiveMode::NonRecursive)
                .map_err(std::io::Error::other)?;
        }

        // Spawn a task to forward events
        let async_tx_clone = async_tx.clone();
        std::thread::spawn(move || {
            let debounce_duration = Duration::from_millis(100);

            while let Ok(event) = sync_rx.recv() {
                let mut batch = vec![event];

                // Coalesce a rapid burst into one batch
                while let Ok(next) = sync_rx.recv_timeout(debounce_duration) {
                    batch.push(next);
                }

                if let Some(e) = classify_batch(&batch, &config_name) {
                    let _ = async_tx_clone.blocking_send(e);
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Reduce a coalesced burst of events to the one to forward.
///
/// A config change anywhere in the burst wins, so a save that an editor
/// follows with swap or backup file churn is still reported as a config
/// change. Otherwise the last classifiable event is forwarded.
fn classify_batch(batch: &[notify::Event], config_name: &OsString) -> Option<WatchEvent> {
    let mut fallback = None;

    for event in batch {
        for path in &event.paths {
            match classify_event(path, &event.kind, config_name) {
                Some(WatchEvent::ConfigChanged(path)) => {
                    return Some(WatchEvent::ConfigChanged(path));
                }
                Some(other) => fallback = Some(other),
                None => {}
            }
        }
    }

    fallback
}

/// Classify a notify event into a WatchEvent.
fn classify_event(
    path: &Path,
    kind: &notify::EventKind,
    config_name: &OsString,
) -> Option<WatchEvent> {
    use notify::EventKind;

    let is_config = path.file_name() == Some(config_name.as_os_str());

    match kind {
        EventKind::Create(_) | EventKind::Modify(_) if is_config => {
            Some(WatchEvent::ConfigChanged(path.to_path_buf()))
        }
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {
            Some(WatchEvent::Other(path.to_path_buf()))
        }
        _ => None,
    }
}
