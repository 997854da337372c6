//! Editor session
//!
//! Maps host events onto analysis runs. Each run is spawned onto the runtime
//! so a slow `git blame` never holds up the next event; the analyzer's
//! generation stamp decides which run may update the indicator.

mod trigger;
mod watcher;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinSet;

use crate::core::ports::{BlameSource, Surface};
use crate::core::services::{Analyzer, Run};

pub use trigger::{Trigger, TriggerError};
pub use watcher::FileWatcher;

/// What the event loop should do after a trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading events
    Continue,
    /// Stop the session
    Quit,
}

/// Event loop state for one editor session
#[derive(Debug)]
pub struct Session<V, S> {
    analyzer: Arc<Analyzer<V, S>>,
    active: Option<PathBuf>,
    runs: JoinSet<Run>,
    watcher: Option<FileWatcher>,
    fs_events: Option<UnboundedReceiver<PathBuf>>,
}

impl<V, S> Session<V, S>
where
    V: BlameSource + 'static,
    S: Surface + 'static,
{
    /// Create a session with no active file
    #[must_use]
    pub fn new(analyzer: Arc<Analyzer<V, S>>) -> Self {
        Self {
            analyzer,
            active: None,
            runs: JoinSet::new(),
            watcher: None,
            fs_events: None,
        }
    }

    /// Also treat filesystem writes to the active file as saves
    #[must_use]
    pub fn with_watcher(mut self, watcher: FileWatcher, events: UnboundedReceiver<PathBuf>) -> Self {
        self.watcher = Some(watcher);
        self.fs_events = Some(events);
        self
    }

    /// The analyzer runs are dispatched to
    #[must_use]
    pub const fn analyzer(&self) -> &Arc<Analyzer<V, S>> {
        &self.analyzer
    }

    /// Currently active file
    #[must_use]
    pub fn active(&self) -> Option<&Path> {
        self.active.as_deref()
    }

    /// Number of runs still in flight
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.runs.len()
    }

    /// Apply one trigger, spawning an analysis run where it calls for one
    pub async fn handle(&mut self, trigger: Trigger) -> Flow {
        debug!("trigger: {trigger:?}");
        match trigger {
            Trigger::Command => match self.active.clone() {
                Some(file) => self.spawn(file),
                None => self.analyzer.no_file_open(),
            },
            Trigger::Focus(file) => {
                if let Some(watcher) = &mut self.watcher
                    && let Err(e) = watcher.follow(&file)
                {
                    warn!("cannot watch {}: {e}", file.display());
                }
                self.active = Some(file.clone());
                self.spawn(file);
            },
            Trigger::Blur => {
                self.active = None;
                if let Some(watcher) = &mut self.watcher {
                    watcher.stop();
                }
            },
            Trigger::Saved(file) => match self.active.clone() {
                Some(active) if same_file(&active, &file).await => self.spawn(active),
                _ => debug!("ignoring save of inactive file {}", file.display()),
            },
            Trigger::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Wait for every in-flight run
    pub async fn drain(&mut self) -> Vec<Run> {
        let mut finished = Vec::new();
        while let Some(joined) = self.runs.join_next().await {
            match joined {
                Ok(run) => finished.push(run),
                Err(e) => warn!("analysis task failed: {e}"),
            }
        }
        finished
    }

    /// Read triggers from `input` until `quit` or end of input, then wait
    /// for in-flight runs
    pub async fn run<R>(&mut self, input: R) -> anyhow::Result<Vec<Run>>
    where
        R: AsyncBufRead + Unpin + Send,
    {
        let mut lines = input.lines();
        let mut finished = Vec::new();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        info!("input closed");
                        break;
                    };
                    match Trigger::parse(&line) {
                        Ok(trigger) => {
                            if self.handle(trigger).await == Flow::Quit {
                                break;
                            }
                        },
                        Err(TriggerError::Empty) => {},
                        Err(e) => warn!("ignoring input line: {e}"),
                    }
                },
                Some(path) = next_fs_event(&mut self.fs_events) => {
                    self.handle(Trigger::Saved(path)).await;
                },
                Some(joined) = self.runs.join_next(), if !self.runs.is_empty() => {
                    match joined {
                        Ok(run) => finished.push(run),
                        Err(e) => warn!("analysis task failed: {e}"),
                    }
                },
            }
        }

        finished.extend(self.drain().await);
        Ok(finished)
    }

    fn spawn(&mut self, file: PathBuf) {
        let analyzer = Arc::clone(&self.analyzer);
        self.runs.spawn(async move { analyzer.run(&file).await });
    }
}

async fn next_fs_event(events: &mut Option<UnboundedReceiver<PathBuf>>) -> Option<PathBuf> {
    match events {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

/// Whether two paths name the same file, falling back to canonical paths
async fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    matches!(
        (tokio::fs::canonicalize(a).await, tokio::fs::canonicalize(b).await),
        (Ok(a), Ok(b)) if a == b
    )
}
