//! Git integration adapter
//!
//! Implements [`BlameSource`] by running the git executable through
//! `tokio::process`. Every argument is passed as its own argv entry, so paths
//! with spaces or shell metacharacters reach git untouched.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};

use log::debug;
use tokio::process::Command;

use crate::core::ports::BlameSource;
use crate::error::AnalysisError;

/// Git-based blame source
#[derive(Debug, Clone)]
pub struct GitCli {
    /// Executable to run
    program: PathBuf,
}

impl GitCli {
    /// Create an adapter running `program` (usually `git`)
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Executable this adapter runs
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    async fn git<I, A>(&self, dir: &Path, args: I) -> io::Result<Output>
    where
        I: IntoIterator<Item = A>,
        A: AsRef<OsStr>,
    {
        let mut command = Command::new(&self.program);
        command.arg("-C").arg(dir).args(args).stdin(Stdio::null());
        debug!("running {command:?}");

        let output = command.output().await?;
        debug!("{} exited with {}", self.program.display(), output.status);
        Ok(output)
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl BlameSource for GitCli {
    async fn is_inside_work_tree(&self, dir: &Path) -> bool {
        self.git(dir, ["rev-parse", "--is-inside-work-tree"])
            .await
            .is_ok_and(|o| o.status.success() && String::from_utf8_lossy(&o.stdout).trim() == "true")
    }

    async fn show_toplevel(&self, dir: &Path) -> Result<PathBuf, AnalysisError> {
        let resolution_error = |message: String| AnalysisError::RootResolution {
            dir: dir.to_path_buf(),
            message,
        };

        let output = self
            .git(dir, ["rev-parse", "--show-toplevel"])
            .await
            .map_err(|e| resolution_error(e.to_string()))?;

        if !output.status.success() {
            return Err(resolution_error(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let root = String::from_utf8_lossy(&output.stdout).trim_end_matches(['\n', '\r']).to_string();
        if root.is_empty() {
            return Err(resolution_error("git printed an empty top-level path".to_string()));
        }
        Ok(PathBuf::from(root))
    }

    async fn blame(&self, root: &Path, relative: &Path) -> Result<String, AnalysisError> {
        let args: [&OsStr; 3] = ["blame".as_ref(), "--".as_ref(), relative.as_os_str()];
        let output = self.git(root, args).await.map_err(|e| AnalysisError::BlameExecution {
            code: None,
            stderr: e.to_string(),
        })?;

        if !output.status.success() {
            return Err(AnalysisError::BlameExecution {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
