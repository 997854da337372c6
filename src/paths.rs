//! Path handling for topcontrib
//!
//! Two concerns live here:
//!
//! - Where the user-level configuration is stored.
//! - How an editor-supplied file path is rewritten before it reaches git.
//!
//! ## Cross-environment paths
//!
//! When the editor runs on Windows but git runs inside WSL, file paths arrive
//! as `C:\Users\a\f.ts` while git expects `/mnt/c/Users/a/f.ts`. Under
//! [`PathStyle::Wsl`] the drive prefix is mapped onto the `/mnt` mount point
//! and backslashes become forward slashes. Under [`PathStyle::Native`] paths
//! pass through unchanged.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Application directory name under the platform config dir
const APP_DIR: &str = "topcontrib";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global topcontrib directory.
///
/// Returns `~/.config/topcontrib/` on Linux (XDG), the platform equivalent
/// elsewhere.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

// =============================================================================
// Path style
// =============================================================================

/// Environment variables whose presence means we run under WSL
const WSL_MARKERS: [&str; 2] = ["WSL_DISTRO_NAME", "WSL_INTEROP"];

/// How file paths are presented to git
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStyle {
    /// Paths are already in the syntax git expects
    #[default]
    Native,
    /// Windows drive paths must be mapped onto WSL mounts
    Wsl,
}

/// Configured path style, with `auto` resolved from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyleSetting {
    /// Detect WSL from environment markers
    #[default]
    Auto,
    /// Always map drive paths
    Wsl,
    /// Never rewrite paths
    Native,
}

impl PathStyleSetting {
    /// Resolve to a concrete style, consulting `lookup` for environment
    /// variables when set to `auto`.
    #[must_use]
    pub fn resolve<F>(self, lookup: F) -> PathStyle
    where
        F: Fn(&str) -> Option<String>,
    {
        match self {
            Self::Wsl => PathStyle::Wsl,
            Self::Native => PathStyle::Native,
            Self::Auto => PathStyle::detect(lookup),
        }
    }
}

impl std::str::FromStr for PathStyleSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "wsl" => Ok(Self::Wsl),
            "native" => Ok(Self::Native),
            _ => Err(format!("Invalid path style: {s}. Use: auto, wsl, native")),
        }
    }
}

impl PathStyle {
    /// Detect the path style from environment markers
    #[must_use]
    pub fn detect<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if WSL_MARKERS
            .iter()
            .any(|&name| lookup(name).is_some_and(|value| !value.is_empty()))
        {
            Self::Wsl
        } else {
            Self::Native
        }
    }

    /// Rewrite `path` into the syntax git expects
    #[must_use]
    pub fn normalize(self, path: &Path) -> PathBuf {
        match self {
            Self::Native => path.to_path_buf(),
            Self::Wsl => PathBuf::from(to_wsl_path(&path.to_string_lossy())),
        }
    }
}

static DRIVE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]):\\").expect("drive pattern is valid"));

/// Map a Windows path onto its WSL mount.
///
/// `C:\Users\a\f.ts` becomes `/mnt/c/Users/a/f.ts`. Remaining backslashes
/// are turned into forward slashes whether or not a drive prefix matched.
#[must_use]
pub fn to_wsl_path(path: &str) -> String {
    DRIVE_PREFIX
        .replace(path, |caps: &regex::Captures<'_>| {
            format!("/mnt/{}/", caps[1].to_ascii_lowercase())
        })
        .replace('\\', "/")
}

/// Directory whose working tree should be queried for `file`
#[must_use]
pub fn containing_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => file.to_path_buf(),
    }
}

/// Express `file` relative to `root` without touching the filesystem
#[must_use]
pub fn relative_to(file: &Path, root: &Path) -> Option<PathBuf> {
    file.strip_prefix(root).ok().map(Path::to_path_buf)
}
