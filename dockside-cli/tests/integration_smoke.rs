//! Smoke tests to verify command wiring

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn dockside() -> Command {
    let mut cmd = Command::cargo_bin("dockside").unwrap();
    // Keep tests independent of the developer's environment
    cmd.env_remove("DATABASE_URL")
        .env_remove("DOCKSIDE_CONFIG")
        .env("HOME", std::env::temp_dir());
    cmd
}

// === Quiz and Items Server Tests ===

#[test]
fn test_quiz_help() {
    dockside()
        .arg("quiz")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question bank TOML file"));
}

#[test]
fn test_items_help() {
    dockside()
        .arg("items")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PostgreSQL connection string"))
        .stdout(predicate::str::contains("--connection-mode"));
}

#[test]
fn test_items_requires_database_url() {
    let dir = tempfile::tempdir().unwrap();
    dockside()
        .current_dir(dir.path())
        .arg("items")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_items_rejects_unknown_connection_mode() {
    dockside()
        .args(["items", "--connection-mode", "sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown connection mode"));
}

// === Questions Command Tests ===

#[test]
fn test_questions_export_is_valid_bank() {
    let output = dockside().args(["questions", "export"]).output().unwrap();
    assert!(output.status.success());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&output.stdout).unwrap();

    dockside()
        .arg("questions")
        .arg("check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("25 questions"));
}

#[test]
fn test_questions_check_rejects_bad_bank() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[[questions]]\nid = 1\nprompt = \"p\"\noptions = [\"a\", \"b\"]\nanswer = 0"
    )
    .unwrap();

    dockside()
        .arg("questions")
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 4"));
}

// === Completions ===

#[test]
fn test_completions_bash() {
    dockside()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dockside"));
}
