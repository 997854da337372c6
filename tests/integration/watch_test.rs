//! Integration tests for `topcontrib watch`
//!
//! Events are written to the session's stdin; the indicator and
//! notifications are read back from stdout and stderr.

use predicates::prelude::*;
use tempfile::TempDir;

use super::{setup_repo, topcontrib};

#[test]
fn test_watch_focus_updates_indicator() {
    let temp = setup_repo();
    let file = temp.path().join("app.py");

    topcontrib()
        .args(["watch", "--no-fs-events"])
        .write_stdin(format!("focus {}\nquit\n", file.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Top Contributor: Alice (3 lines)"));
}

#[test]
fn test_watch_initial_file_and_end_of_input() {
    let temp = setup_repo();

    topcontrib()
        .args(["watch", "--no-fs-events", "app.py"])
        .current_dir(temp.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Top Contributor: Alice (3 lines)"));
}

#[test]
fn test_watch_show_without_active_file() {
    topcontrib()
        .args(["watch", "--no-fs-events"])
        .write_stdin("show\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No file open!"));
}

#[test]
fn test_watch_outside_repository() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("notes.txt");
    std::fs::write(&file, "hello\n").unwrap();

    topcontrib()
        .args(["watch", "--no-fs-events"])
        .write_stdin(format!("focus {}\n", file.display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("The file is not in a Git repository.").count(1));
}

#[test]
fn test_watch_json_events() {
    let temp = setup_repo();
    let file = temp.path().join("app.py");

    let output = topcontrib()
        .args(["--json", "watch", "--no-fs-events"])
        .write_stdin(format!("focus {}\nblur\nshow\nquit\n", file.display()))
        .output()
        .unwrap();
    assert!(output.status.success());

    let events: Vec<serde_json::Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert!(events.iter().any(|e| e["event"] == "indicator"
        && e["visible"] == true
        && e["text"] == "Top Contributor: Alice (3 lines)"));
    assert!(events.iter().any(|e| e["event"] == "notification"
        && e["severity"] == "error"
        && e["message"] == "No file open!"));
}

#[test]
fn test_watch_ignores_unknown_events() {
    topcontrib()
        .args(["watch", "--no-fs-events"])
        .write_stdin("reload everything\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
