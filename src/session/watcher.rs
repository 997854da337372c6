//! Filesystem save detection
//!
//! Watches the directory of the active file (non-recursively, so editors
//! that save through a rename are still seen) and forwards paths that were
//! written to.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use notify::event::ModifyKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::paths;

/// Watches the directory of one file at a time
pub struct FileWatcher {
    inner: RecommendedWatcher,
    watched: Option<PathBuf>,
}

impl std::fmt::Debug for FileWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWatcher").field("watched", &self.watched).finish_non_exhaustive()
    }
}

impl FileWatcher {
    /// Start a watcher. Written paths arrive on the returned receiver.
    pub fn new() -> notify::Result<(Self, UnboundedReceiver<PathBuf>)> {
        let (tx, rx) = mpsc::unbounded_channel();
        let inner = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) if is_write(&event.kind) => {
                for path in event.paths {
                    // Receiver gone means the session ended.
                    let _ = tx.send(path);
                }
            },
            Ok(_) => {},
            Err(e) => warn!("file watcher error: {e}"),
        })?;

        Ok((
            Self {
                inner,
                watched: None,
            },
            rx,
        ))
    }

    /// Watch the directory containing `file`, dropping the previous one
    pub fn follow(&mut self, file: &Path) -> notify::Result<()> {
        let dir = paths::containing_dir(file);
        if self.watched.as_deref() == Some(dir.as_path()) {
            return Ok(());
        }

        self.stop();
        self.inner.watch(&dir, RecursiveMode::NonRecursive)?;
        debug!("watching {}", dir.display());
        self.watched = Some(dir);
        Ok(())
    }

    /// Stop watching
    pub fn stop(&mut self) {
        if let Some(previous) = self.watched.take()
            && let Err(e) = self.inner.unwatch(&previous)
        {
            debug!("unwatch {}: {e}", previous.display());
        }
    }

    /// Directory currently watched
    #[must_use]
    pub fn watched(&self) -> Option<&Path> {
        self.watched.as_deref()
    }
}

const fn is_write(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_)
            | EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Name(_) | ModifyKind::Any)
    )
}
