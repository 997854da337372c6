//! Global configuration management
//!
//! Config is stored at `~/.config/topcontrib/config.toml` (XDG standard).
//! Every field is optional:
//!
//! ```toml
//! locale = "pt-BR"
//! git = "/usr/bin/git"
//! path_style = "auto"   # auto | wsl | native
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;
use crate::paths::{self, PathStyle, PathStyleSetting};

/// Environment variable overriding the configured locale
pub const LOCALE_ENV: &str = "TOPCONTRIB_LOCALE";

/// Global topcontrib configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Active locale code (e.g. `en`, `pt-BR`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Git executable to invoke
    #[serde(default = "default_git")]
    pub git: String,
    /// How file paths are rewritten before reaching git
    #[serde(default)]
    pub path_style: PathStyleSetting,
}

fn default_git() -> String {
    "git".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: None,
            git: default_git(),
            path_style: PathStyleSetting::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or fall back to defaults.
    ///
    /// A malformed file is reported through the log and otherwise ignored.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            log::warn!("ignoring config at {}: {e:#}", path.display());
            Self::default()
        })
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Resolve the active locale.
    ///
    /// Order: `explicit` (command line), `TOPCONTRIB_LOCALE`, the config
    /// file, `LANG`, then English.
    #[must_use]
    pub fn resolve_locale<F>(&self, explicit: Option<&str>, lookup: F) -> Locale
    where
        F: Fn(&str) -> Option<String>,
    {
        // Set-but-empty values fall through to the next source.
        let present = |code: &String| !code.trim().is_empty();
        explicit
            .map(str::to_string)
            .filter(present)
            .or_else(|| lookup(LOCALE_ENV).filter(present))
            .or_else(|| self.locale.clone().filter(present))
            .or_else(|| lookup("LANG").filter(present))
            .map_or_else(Locale::default, |code| Locale::from_code(&code))
    }

    /// Resolve the path style, consulting the environment for `auto`
    #[must_use]
    pub fn resolve_path_style<F>(&self, lookup: F) -> PathStyle
    where
        F: Fn(&str) -> Option<String>,
    {
        self.path_style.resolve(lookup)
    }
}
