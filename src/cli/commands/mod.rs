//! Command implementations

mod config;
mod show;
mod watch;

pub use config::config;
pub use show::show;
pub use watch::watch;

use topcontrib::adapters::GitCli;
use topcontrib::config::Config;
use topcontrib::i18n::Locale;
use topcontrib::output::OutputMode;
use topcontrib::paths::PathStyle;

/// Settings shared by every command, resolved once at startup
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration, with command-line overrides applied
    pub config: Config,
    /// Resolved message locale
    pub locale: Locale,
    /// Resolved path style
    pub path_style: PathStyle,
    /// Human or JSON output
    pub mode: OutputMode,
}

impl Context {
    /// Resolve locale and path style against the process environment
    pub fn new(config: Config, locale: Option<&str>, mode: OutputMode) -> Self {
        let env = |name: &str| std::env::var(name).ok();
        let locale = config.resolve_locale(locale, env);
        let path_style = config.resolve_path_style(env);
        log::debug!("locale {locale}, path style {path_style:?}, git {}", config.git);
        Self {
            config,
            locale,
            path_style,
            mode,
        }
    }

    /// Blame source running the configured git executable
    pub fn git(&self) -> GitCli {
        GitCli::new(&self.config.git)
    }
}
