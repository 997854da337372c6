//! Watch command - editor session driven by stdin

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use log::{info, warn};
use tokio::io::BufReader;

use topcontrib::adapters::TerminalSurface;
use topcontrib::core::services::Analyzer;
use topcontrib::session::{FileWatcher, Session, Trigger};

use super::Context;

/// Run a session until `quit` or end of input
pub async fn watch(file: Option<PathBuf>, fs_events: bool, ctx: &Context) -> anyhow::Result<ExitCode> {
    let surface = TerminalSurface::new(ctx.mode);
    let analyzer = Arc::new(Analyzer::new(ctx.git(), surface, ctx.locale, ctx.path_style));
    let mut session = Session::new(analyzer);

    if fs_events {
        match FileWatcher::new() {
            Ok((watcher, events)) => session = session.with_watcher(watcher, events),
            Err(e) => warn!("filesystem events unavailable: {e}"),
        }
    }

    if let Some(file) = file {
        session.handle(Trigger::Focus(file)).await;
    }

    let runs = session.run(BufReader::new(tokio::io::stdin())).await?;
    info!("session finished after {} run(s)", runs.len());
    Ok(ExitCode::SUCCESS)
}
