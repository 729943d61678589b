//! Classify subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_classify_relative_paths() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("stricture")
        .current_dir(temp_dir.path())
        .args([
            "classify",
            "commands/deploy.md",
            "governance/policy.md",
            "docs/guide.md",
            "src/main.rs",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("strict\tcommands/deploy.md"))
        .stdout(predicate::str::contains("moderate\tgovernance/policy.md"))
        .stdout(predicate::str::contains("light\tdocs/guide.md"))
        .stdout(predicate::str::contains("none\tsrc/main.rs"));
}

#[test]
fn test_classify_with_root() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("rules").join("naming.md");

    cargo_bin_cmd!("stricture")
        .current_dir(temp_dir.path())
        .args(["classify", "--root"])
        .arg(temp_dir.path())
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("strict\t"));
}

#[test]
fn test_classify_with_config_patterns() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".stricture.toml"),
        "[tiers]\nstrict = [\"prompts/*.md\"]\n",
    )
    .unwrap();

    cargo_bin_cmd!("stricture")
        .current_dir(temp_dir.path())
        .args(["classify", "prompts/a.md", "commands/b.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strict\tprompts/a.md"))
        .stdout(predicate::str::contains("light\tcommands/b.md"));
}

#[test]
fn test_classify_invalid_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[tiers]\nstrict = [\"commands/[\"]\n").unwrap();

    cargo_bin_cmd!("stricture")
        .current_dir(temp_dir.path())
        .args(["classify", "--config"])
        .arg(&config)
        .arg("a.md")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid strict pattern"));
}
