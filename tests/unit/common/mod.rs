//! Shared test fixtures and helpers
//!
//! Provides a scriptable [`FakeVcs`] and helpers to build real git
//! repositories in temporary directories.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use tokio::sync::Notify;

use topcontrib::core::ports::BlameSource;
use topcontrib::error::AnalysisError;

/// Blame output where Alice owns two lines and Bob one
pub const SAMPLE_BLAME: &str = "abc123 (Alice 2024-01-01 1) code\n\
                                abc123 (Alice 2024-01-01 2) code\n\
                                def456 (Bob 2024-01-01 3) code\n";

/// A scriptable blame source
///
/// Blame output is keyed by the repository-relative path git would receive.
/// A gated path blocks its blame until the matching [`Notify`] fires.
#[derive(Debug, Default)]
pub struct FakeVcs {
    pub inside: bool,
    pub root: PathBuf,
    pub root_error: Option<String>,
    pub outputs: HashMap<PathBuf, Result<String, AnalysisError>>,
    pub gates: HashMap<PathBuf, Arc<Notify>>,
    pub membership_checks: AtomicUsize,
    pub root_lookups: AtomicUsize,
    pub blames: AtomicUsize,
    pub blamed: Mutex<Vec<PathBuf>>,
}

impl FakeVcs {
    /// A working tree rooted at `root`
    pub fn repo(root: impl Into<PathBuf>) -> Self {
        Self {
            inside: true,
            root: root.into(),
            ..Self::default()
        }
    }

    /// A directory outside any working tree
    pub fn outside() -> Self {
        Self::default()
    }

    pub fn with_blame(mut self, relative: &str, output: &str) -> Self {
        self.outputs.insert(PathBuf::from(relative), Ok(output.to_string()));
        self
    }

    pub fn with_blame_error(mut self, relative: &str, error: AnalysisError) -> Self {
        self.outputs.insert(PathBuf::from(relative), Err(error));
        self
    }

    pub fn with_root_error(mut self, message: &str) -> Self {
        self.root_error = Some(message.to_string());
        self
    }

    /// Block blame of `relative` until the returned handle is notified
    pub fn with_gate(mut self, relative: &str) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gates.insert(PathBuf::from(relative), Arc::clone(&gate));
        (self, gate)
    }

    pub fn blame_count(&self) -> usize {
        self.blames.load(Ordering::SeqCst)
    }

    pub fn blamed(&self) -> Vec<PathBuf> {
        self.blamed.lock().unwrap().clone()
    }
}

impl BlameSource for FakeVcs {
    async fn is_inside_work_tree(&self, _dir: &Path) -> bool {
        self.membership_checks.fetch_add(1, Ordering::SeqCst);
        self.inside
    }

    async fn show_toplevel(&self, dir: &Path) -> Result<PathBuf, AnalysisError> {
        self.root_lookups.fetch_add(1, Ordering::SeqCst);
        match &self.root_error {
            Some(message) => Err(AnalysisError::RootResolution {
                dir: dir.to_path_buf(),
                message: message.clone(),
            }),
            None => Ok(self.root.clone()),
        }
    }

    async fn blame(&self, _root: &Path, relative: &Path) -> Result<String, AnalysisError> {
        self.blames.fetch_add(1, Ordering::SeqCst);
        self.blamed.lock().unwrap().push(relative.to_path_buf());

        let gate = self.gates.get(relative).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.outputs.get(relative).cloned().unwrap_or_else(|| Ok(String::new()))
    }
}

/// Run git in `dir`, panicking on failure
pub fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Initialize a git repo with a default identity and signing disabled
pub fn init_git_repo(dir: &Path) {
    git(dir, &["init", "-q"]);
    git(dir, &["config", "user.email", "alice@example.com"]);
    git(dir, &["config", "user.name", "Alice"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    git(dir, &["config", "core.hooksPath", "/dev/null"]);
}

/// Commit everything in `dir` as `author`
pub fn commit_as(dir: &Path, author: &str, message: &str) {
    let name = format!("user.name={author}");
    let email = format!("user.email={}@example.com", author.to_lowercase());
    git(dir, &["add", "-A"]);
    git(dir, &["-c", &name, "-c", &email, "commit", "-q", "-m", message]);
}

/// A repository where `src/lib.rs` has three lines by Alice and one by Bob
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        init_git_repo(dir.path());

        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/lib.rs"), "fn a() {}\nfn b() {}\nfn c() {}\n").unwrap();
        commit_as(dir.path(), "Alice", "Initial commit");

        fs::write(
            dir.path().join("src/lib.rs"),
            "fn a() {}\nfn b() {}\nfn c() {}\nfn d() {}\n",
        )
        .unwrap();
        commit_as(dir.path(), "Bob", "Add d");

        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}
