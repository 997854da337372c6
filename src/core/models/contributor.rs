//! Top contributor result

use serde::Serialize;

use crate::i18n::{self, Locale, keys};

/// The author with the most attributed lines in a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopContributor {
    /// Author name
    pub author: String,
    /// Lines attributed to the author
    pub lines: usize,
}

impl TopContributor {
    /// Indicator text, e.g. `Top Contributor: Alice (42 lines)`
    #[must_use]
    pub fn label(&self, locale: Locale) -> String {
        format!(
            "{}: {} ({} {})",
            i18n::translate(locale, keys::TOP_CONTRIBUTOR),
            self.author,
            self.lines,
            i18n::translate(locale, keys::LINES)
        )
    }
}
