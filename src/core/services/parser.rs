//! Blame output parser
//!
//! Turns the default `git blame` annotation format into a [`Tally`]:
//!
//! ```text
//! 3f2a91c4 (Alice 2024-01-01 10:00:00 +0000  1) fn main() {
//! ^b81e0d2 (Bob   2023-12-24 09:12:44 +0000  2) }
//! ```
//!
//! The author is the first whitespace-delimited token after the opening
//! parenthesis, so `Alice Smith` is counted as `Alice`.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::Tally;

static AUTHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+\s+\((.+?)\s+").expect("author pattern is valid"));

/// Extract the author token from a single annotation line
#[must_use]
pub fn author_of(line: &str) -> Option<&str> {
    AUTHOR
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Count attributed lines per author. Lines that do not look like blame
/// annotations are skipped.
#[must_use]
pub fn parse_blame(output: &str) -> Tally {
    output.lines().filter_map(author_of).collect()
}
