//! Cross-cutting CLI tests (help, version, rules listing, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("stricture")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stricture classifies Markdown documents"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("stricture")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("stricture")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("stricture")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_rules_listing() {
    cargo_bin_cmd!("stricture")
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("heading-order\tstrict\terror"))
        .stdout(predicate::str::contains("moderate-markdown\tmoderate\twarning"))
        .stdout(predicate::str::contains("light-markdown\tlight\twarning"));
}
