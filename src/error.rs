//! Analysis error taxonomy
//!
//! Every failure of a single analysis run ends up as one of these variants.
//! None of them are fatal: the analyzer turns each into a transient
//! notification and hides the indicator.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::models::Severity;
use crate::i18n::{self, Locale, keys};

/// Errors produced while analyzing a single file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The file's directory is not inside a git working tree
    #[error("not inside a git working tree: {}", dir.display())]
    NotARepository {
        /// Directory that was checked
        dir: PathBuf,
    },

    /// Blame succeeded but no line could be attributed to an author
    #[error("no contributors found")]
    NoContributors,

    /// The working tree root could not be determined
    #[error("could not resolve repository root from {}: {message}", dir.display())]
    RootResolution {
        /// Directory the lookup started from
        dir: PathBuf,
        /// Underlying process error text
        message: String,
    },

    /// The file cannot be expressed relative to the repository root
    #[error("{} is not under repository root {}", path.display(), root.display())]
    OutsideRoot {
        /// File being analyzed
        path: PathBuf,
        /// Root reported by git
        root: PathBuf,
    },

    /// `git blame` exited non-zero or could not be started
    #[error("{}", describe_blame_failure(*code, stderr))]
    BlameExecution {
        /// Exit code, if the process ran at all
        code: Option<i32>,
        /// Captured standard error, or the spawn error text
        stderr: String,
    },
}

fn describe_blame_failure(code: Option<i32>, stderr: &str) -> String {
    match code {
        Some(code) => format!("git blame failed with code {code}: {}", stderr.trim()),
        None => format!("error executing git blame: {}", stderr.trim()),
    }
}

impl AnalysisError {
    /// Severity of the notification this error produces
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::NotARepository { .. } | Self::NoContributors => Severity::Warning,
            Self::RootResolution { .. } | Self::OutsideRoot { .. } | Self::BlameExecution { .. } => {
                Severity::Error
            },
        }
    }

    /// Short machine-readable kind, used in JSON output
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotARepository { .. } => "not_a_repository",
            Self::NoContributors => "no_contributors",
            Self::RootResolution { .. } | Self::OutsideRoot { .. } => "root_resolution",
            Self::BlameExecution { .. } => "execution_error",
        }
    }

    /// Localized message shown to the user
    #[must_use]
    pub fn user_message(&self, locale: Locale) -> String {
        let t = |key: &'static str| i18n::translate(locale, key);
        match self {
            Self::NotARepository { .. } => t(keys::FILE_IS_NOT_IN_A_GIT_REPOSITORY).to_string(),
            Self::NoContributors => t(keys::NO_CONTRIBUTORS_FOUND).to_string(),
            Self::BlameExecution {
                code: Some(code),
                stderr,
            } => format!(
                "{}: {} {code}: {}",
                t(keys::ERROR_GETTING_CONTRIBUTIONS),
                t(keys::GIT_BLAME_FAILED),
                stderr.trim()
            ),
            Self::BlameExecution { code: None, stderr } => format!(
                "{}: {}: {}",
                t(keys::ERROR_GETTING_CONTRIBUTIONS),
                t(keys::ERROR_EXECUTING_GIT_BLAME),
                stderr.trim()
            ),
            Self::RootResolution { .. } | Self::OutsideRoot { .. } => {
                format!("{}: {self}", t(keys::ERROR_GETTING_CONTRIBUTIONS))
            },
        }
    }
}
