//! Message localization
//!
//! A fixed two-locale table keyed by symbolic identifiers. The active locale
//! is always passed in by the caller; nothing here reads the environment.

use serde::Serialize;

/// Symbolic message keys
pub mod keys {
    /// No file is active
    pub const NO_FILE_OPEN: &str = "noFileOpen";
    /// The file is outside any working tree
    pub const FILE_IS_NOT_IN_A_GIT_REPOSITORY: &str = "fileIsNotInAGitRepository";
    /// Blame produced no attributable line
    pub const NO_CONTRIBUTORS_FOUND: &str = "noContributorsFound";
    /// Prefix for every execution error
    pub const ERROR_GETTING_CONTRIBUTIONS: &str = "errorGettingContributions";
    /// Blame exited non-zero
    pub const GIT_BLAME_FAILED: &str = "gitBlameFailed";
    /// Blame could not be started
    pub const ERROR_EXECUTING_GIT_BLAME: &str = "errorExecutingGitBlame";
    /// Indicator label
    pub const TOP_CONTRIBUTOR: &str = "topContribuitor";
    /// Unit shown after the line count
    pub const LINES: &str = "lines";
}

const EN: &[(&str, &str)] = &[
    (keys::NO_FILE_OPEN, "No file open!"),
    (keys::FILE_IS_NOT_IN_A_GIT_REPOSITORY, "The file is not in a Git repository."),
    (keys::NO_CONTRIBUTORS_FOUND, "No contributors found."),
    (keys::ERROR_GETTING_CONTRIBUTIONS, "Error getting contributions"),
    (keys::GIT_BLAME_FAILED, "git blame failed with code"),
    (keys::ERROR_EXECUTING_GIT_BLAME, "Error executing git blame"),
    (keys::TOP_CONTRIBUTOR, "Top Contributor"),
    (keys::LINES, "lines"),
];

const PT_BR: &[(&str, &str)] = &[
    (keys::NO_FILE_OPEN, "Nenhum arquivo aberto!"),
    (keys::FILE_IS_NOT_IN_A_GIT_REPOSITORY, "O arquivo não está em um repositório Git."),
    (keys::NO_CONTRIBUTORS_FOUND, "Nenhum contribuinte encontrado."),
    (keys::ERROR_GETTING_CONTRIBUTIONS, "Erro ao obter contribuições"),
    (keys::GIT_BLAME_FAILED, "git blame falhou com código"),
    (keys::ERROR_EXECUTING_GIT_BLAME, "Erro ao executar git blame"),
    (keys::TOP_CONTRIBUTOR, "Maior Contribuidor"),
    (keys::LINES, "linhas"),
];

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Locale {
    /// English (fallback for anything unrecognized)
    #[default]
    #[serde(rename = "en")]
    En,
    /// Brazilian Portuguese
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Locale {
    /// Resolve a locale code such as `pt-BR`, `pt_BR.UTF-8` or `en-US`.
    ///
    /// Matching is case-insensitive and ignores encoding suffixes and
    /// modifiers. Unrecognized codes resolve to [`Locale::En`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        let base = code
            .split(['.', '@'])
            .next()
            .unwrap_or(code)
            .trim()
            .replace('_', "-")
            .to_ascii_lowercase();

        match base.as_str() {
            "pt-br" | "pt" => Self::PtBr,
            _ => Self::En,
        }
    }

    /// Canonical code for this locale
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::PtBr => "pt-BR",
        }
    }

    const fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => EN,
            Self::PtBr => PT_BR,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Translate `key` for `locale`, returning the key itself when the table has
/// no entry for it.
#[must_use]
pub fn translate(locale: Locale, key: &str) -> &str {
    locale
        .table()
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, message)| *message)
}
