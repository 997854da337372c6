//! Contribution tally
//!
//! Per-author line counts built fresh from one blame run.

use std::collections::BTreeMap;

use serde::Serialize;

/// Mapping from author name (as emitted by git blame) to attributed lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tally {
    counts: BTreeMap<String, usize>,
}

/// One entry of a ranked tally
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLines {
    /// Author name
    pub author: String,
    /// Number of attributed lines
    pub lines: usize,
}

impl Tally {
    /// Create an empty tally
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute one more line to `author`
    pub fn record(&mut self, author: &str) {
        if let Some(count) = self.counts.get_mut(author) {
            *count += 1;
        } else {
            self.counts.insert(author.to_string(), 1);
        }
    }

    /// Lines attributed to `author` (zero if unknown)
    #[must_use]
    pub fn lines_for(&self, author: &str) -> usize {
        self.counts.get(author).copied().unwrap_or(0)
    }

    /// Number of distinct authors
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no line was attributed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total attributed lines
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate `(author, lines)` in author order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(author, &lines)| (author.as_str(), lines))
    }

    /// Entries sorted by line count descending, then author ascending
    #[must_use]
    pub fn ranked(&self) -> Vec<AuthorLines> {
        let mut entries: Vec<AuthorLines> = self
            .iter()
            .map(|(author, lines)| AuthorLines {
                author: author.to_string(),
                lines,
            })
            .collect();
        entries.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.author.cmp(&b.author)));
        entries
    }
}

impl<'a> FromIterator<&'a str> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Self::new();
        for author in iter {
            tally.record(author);
        }
        tally
    }
}
