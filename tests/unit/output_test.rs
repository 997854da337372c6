//! Tests for the Output module
//!
//! `ShowResult` is assembled from a finished run plus whatever the surface
//! recorded, and serialized for `--json`.

use std::path::Path;

use topcontrib::adapters::RecordingSurface;
use topcontrib::core::services::Analyzer;
use topcontrib::i18n::Locale;
use topcontrib::output::{OutputMode, ShowResult};
use topcontrib::paths::PathStyle;

use crate::common::{FakeVcs, SAMPLE_BLAME};

async fn show(vcs: FakeVcs, file: &str) -> ShowResult {
    let analyzer = Analyzer::new(vcs, RecordingSurface::new(), Locale::En, PathStyle::Native);
    let run = analyzer.run(Path::new(file)).await;
    let surface = analyzer.surface();
    ShowResult::new(file.to_string(), &run, &surface.indicator(), surface.notifications())
}

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[tokio::test]
async fn successful_show_serializes_ranking() {
    let result = show(FakeVcs::repo("/repo").with_blame("a.rs", SAMPLE_BLAME), "/repo/a.rs").await;
    assert!(result.displayed());

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["indicator"], "Top Contributor: Alice (2 lines)");
    assert_eq!(json["top"]["author"], "Alice");
    assert_eq!(json["top"]["lines"], 2);
    assert_eq!(json["total_lines"], 3);
    assert_eq!(json["contributors"][1]["author"], "Bob");
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn failed_show_carries_error_kind() {
    let result = show(FakeVcs::outside(), "/elsewhere/a.rs").await;
    assert!(!result.displayed());

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["error"]["kind"], "not_a_repository");
    assert_eq!(json["error"]["severity"], "warning");
    assert_eq!(json["notifications"][0]["message"], "The file is not in a Git repository.");
    assert!(json.get("indicator").is_none());
    assert!(json.get("top").is_none());
}

#[test]
fn no_file_result() {
    let result = ShowResult::no_file(Vec::new());
    assert!(!result.displayed());
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"kind\":\"no_file_open\""));
}
