//! Version control system port
//!
//! Defines the interface the analyzer uses to talk to git.

use std::future::Future;
use std::path::{Path, PathBuf};

use crate::error::AnalysisError;

/// Asynchronous access to the blame facility of a version control system
///
/// Implementations must not block the calling thread. Returned futures are
/// `Send` so analysis runs can be spawned onto a multi-threaded runtime.
pub trait BlameSource: Send + Sync {
    /// Whether `dir` lies inside a working tree
    fn is_inside_work_tree(&self, dir: &Path) -> impl Future<Output = bool> + Send;

    /// Top-level directory of the working tree containing `dir`
    fn show_toplevel(
        &self,
        dir: &Path,
    ) -> impl Future<Output = Result<PathBuf, AnalysisError>> + Send;

    /// Raw blame annotation for `relative`, scoped to `root`
    fn blame(
        &self,
        root: &Path,
        relative: &Path,
    ) -> impl Future<Output = Result<String, AnalysisError>> + Send;
}
