//! Analysis workflow
//!
//! One run takes a file path through membership check, root lookup, blame,
//! parsing and selection, then commits the outcome to the [`Surface`]:
//!
//! ```text
//! start ─ not in work tree ──────────────> NotARepository  (warn, hide)
//!   │
//!   └─ root + relative path ─ blame ─ err ─> execution error (error, hide)
//!                               │
//!                               └─ parse ─ empty ─> NoContributors (warn, hide)
//!                                   │
//!                                   └─ top contributor ─> indicator updated
//! ```
//!
//! Runs may overlap. Each run takes a generation stamp when it starts and
//! only the newest generation is allowed to touch the surface, so a slow run
//! for a file the user already left never overwrites a newer result.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use log::{debug, info};

use crate::core::models::{Notification, Tally, TopContributor};
use crate::core::ports::{BlameSource, Surface};
use crate::core::services::{parse_blame, top_contributor};
use crate::error::AnalysisError;
use crate::i18n::{self, Locale, keys};
use crate::paths::{self, PathStyle};

/// Successful analysis of one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// File as handed to git (after path normalization)
    pub file: PathBuf,
    /// Working tree root
    pub root: PathBuf,
    /// File path relative to `root`
    pub relative: PathBuf,
    /// Author with the most lines
    pub top: TopContributor,
    /// All per-author counts
    pub tally: Tally,
}

/// Outcome of [`Analyzer::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Generation stamp this run started with
    pub generation: u64,
    /// What the analysis produced
    pub result: Result<Report, AnalysisError>,
    /// Whether the result reached the surface (false when superseded)
    pub committed: bool,
}

/// Orchestrates analysis runs against a blame source and an output surface
#[derive(Debug)]
pub struct Analyzer<V, S> {
    vcs: V,
    surface: S,
    locale: Locale,
    path_style: PathStyle,
    generation: AtomicU64,
    commit_lock: Mutex<()>,
}

impl<V: BlameSource, S: Surface> Analyzer<V, S> {
    /// Create an analyzer
    #[must_use]
    pub const fn new(vcs: V, surface: S, locale: Locale, path_style: PathStyle) -> Self {
        Self {
            vcs,
            surface,
            locale,
            path_style,
            generation: AtomicU64::new(0),
            commit_lock: Mutex::new(()),
        }
    }

    /// The output surface
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// The blame source
    #[must_use]
    pub const fn vcs(&self) -> &V {
        &self.vcs
    }

    /// Active locale
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Analyze `file` without touching the surface
    pub async fn analyze(&self, file: &Path) -> Result<Report, AnalysisError> {
        let file = self.path_style.normalize(file);
        let dir = paths::containing_dir(&file);

        if !self.vcs.is_inside_work_tree(&dir).await {
            return Err(AnalysisError::NotARepository { dir });
        }

        let root = self.vcs.show_toplevel(&dir).await?;
        let relative = resolve_relative(&file, &root).await?;
        debug!("blaming {} in {}", relative.display(), root.display());

        let output = self.vcs.blame(&root, &relative).await?;
        let tally = parse_blame(&output);
        let top = top_contributor(&tally).ok_or(AnalysisError::NoContributors)?;

        Ok(Report {
            file,
            root,
            relative,
            top,
            tally,
        })
    }

    /// Analyze `file` and commit the outcome to the surface if no newer run
    /// has started in the meantime
    pub async fn run(&self, file: &Path) -> Run {
        let generation = self.begin();
        debug!("run {generation}: {}", file.display());

        let result = self.analyze(file).await;
        let committed = self.commit(generation, &result);

        Run {
            generation,
            result,
            committed,
        }
    }

    /// Report that there is no active file
    pub fn no_file_open(&self) {
        self.surface
            .notify(Notification::error(i18n::translate(self.locale, keys::NO_FILE_OPEN)));
    }

    /// Most recently issued generation
    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    // The guard spans the generation check and the surface writes
    #[allow(clippy::significant_drop_tightening)]
    fn commit(&self, generation: u64, result: &Result<Report, AnalysisError>) -> bool {
        let _guard = self.commit_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let current = self.current_generation();
        if generation != current {
            info!("discarding result of run {generation}, superseded by run {current}");
            return false;
        }

        match result {
            Ok(report) => self.surface.update(&report.top.label(self.locale)),
            Err(e) => {
                debug!("run {generation} failed: {e}");
                self.surface.notify(Notification {
                    severity: e.severity(),
                    message: e.user_message(self.locale),
                });
                self.surface.hide();
            },
        }
        true
    }
}

/// Express `file` relative to `root`, retrying with canonical paths when the
/// two disagree lexically (relative input, symlinked temp dirs)
async fn resolve_relative(file: &Path, root: &Path) -> Result<PathBuf, AnalysisError> {
    if let Some(relative) = paths::relative_to(file, root) {
        return Ok(relative);
    }

    let outside = || AnalysisError::OutsideRoot {
        path: file.to_path_buf(),
        root: root.to_path_buf(),
    };
    let canonical_file = tokio::fs::canonicalize(file).await.map_err(|_| outside())?;
    let canonical_root = tokio::fs::canonicalize(root).await.map_err(|_| outside())?;
    paths::relative_to(&canonical_file, &canonical_root).ok_or_else(outside)
}
