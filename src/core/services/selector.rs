//! Top-contributor selection

use crate::core::models::{Tally, TopContributor};

/// Pick the author with the most lines.
///
/// Ties go to the lexicographically first author. Returns `None` for an
/// empty tally.
#[must_use]
pub fn top_contributor(tally: &Tally) -> Option<TopContributor> {
    tally
        .iter()
        .fold(None, |best: Option<(&str, usize)>, (author, lines)| match best {
            Some((_, best_lines)) if best_lines >= lines => best,
            _ => Some((author, lines)),
        })
        .map(|(author, lines)| TopContributor {
            author: author.to_string(),
            lines,
        })
}
