//! Property-based tests for the blame parser
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::collections::HashMap;

use proptest::prelude::*;
use topcontrib::core::services::{parse_blame, top_contributor};

/// One annotated blame line for `author`
fn blame_line(rev: &str, author: &str, number: usize, content: &str) -> String {
    format!("{rev} ({author} 2024-03-01 12:00:00 +0000 {number}) {content}")
}

proptest! {
    /// Arbitrary text never panics and never yields more lines than it has
    #[test]
    fn arbitrary_output_is_bounded(output in any::<String>()) {
        let tally = parse_blame(&output);
        prop_assert!(tally.total_lines() <= output.lines().count());
    }

    /// Line-shaped noise without the author group contributes nothing
    #[test]
    fn lines_without_parenthesis_are_skipped(lines in prop::collection::vec("[^(\n]{0,40}", 0..20)) {
        let output = lines.join("\n");
        prop_assert!(parse_blame(&output).is_empty());
    }

    /// Every well-formed line counts exactly once for its author
    #[test]
    fn annotated_lines_count_once(
        entries in prop::collection::vec(
            ("[0-9a-f]{8}", "[A-Za-z][A-Za-z0-9._-]{0,12}", "[ -~]{0,30}"),
            1..40,
        )
    ) {
        let output = entries
            .iter()
            .enumerate()
            .map(|(i, (rev, author, content))| blame_line(rev, author, i + 1, content))
            .collect::<Vec<_>>()
            .join("\n");

        let mut expected: HashMap<&str, usize> = HashMap::new();
        for (_, author, _) in &entries {
            *expected.entry(author.as_str()).or_default() += 1;
        }

        let tally = parse_blame(&output);
        prop_assert_eq!(tally.total_lines(), entries.len());
        prop_assert_eq!(tally.len(), expected.len());
        for (author, lines) in &expected {
            prop_assert_eq!(tally.lines_for(author), *lines);
        }

        let top = top_contributor(&tally).unwrap();
        prop_assert_eq!(Some(&top.lines), expected.values().max());
    }
}
