//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_simple_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "# Heading\n\nParagraph with **strong** text.\n").unwrap();

    cargo_bin_cmd!("stricture")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("DOCUMENT"))
        .stdout(predicate::str::contains("Heading"))
        .stdout(predicate::str::contains("Strong"));
}

#[test]
fn test_parse_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("stricture")
        .args(["parse", temp_dir.path().join("nope.md").to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}
