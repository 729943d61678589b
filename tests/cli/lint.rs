//! Lint subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CANONICAL: &[&str] = &[
    "Scope",
    "Absolute-Prohibitions",
    "Communication-Protocol",
    "Structural-Rules",
    "Language-Rules",
    "Formatting-Rules",
    "Naming-Rules",
    "Validation-Rules",
    "Narrative-Detection",
    "Depth-Compatibility",
];

fn compliant_strict() -> String {
    CANONICAL
        .iter()
        .map(|h| format!("## {h}\n\nValidate all inputs.\n\n"))
        .collect()
}

/// Write `content` at `relative` inside the project directory.
fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_lint_clean_file() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "commands/deploy.md", &compliant_strict());

    cargo_bin_cmd!("stricture")
        .current_dir(temp_dir.path())
        .args(["lint", "commands/deploy.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "commands/deploy.md: no issues found (strict)",
        ));
}

#[test]
fn test_lint_quiet_clean_file() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "commands/deploy.md", &compliant_strict());

    cargo_bin_cmd!("stricture")
        .current_dir(temp_dir.path())
        .args(["lint", "--quiet", "commands/deploy.md"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_lint_strict_errors_exit_1() {
    let temp_dir = TempDir::new().unwrap();
    let mut content = compliant_strict();
    content.push_str("Use **bold** text.\n");
    write(temp_dir.path(), "commands/deploy.md", &content);

    cargo_bin_cmd!("stricture")
        .current_dir(temp_dir.path())
        .args(["lint", "commands/deploy.md"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[no-strong]"))
        .stdout(predicate::str::contains(
            "Bold/strong emphasis is prohibited in LLM-facing files at commands/deploy.md:41:5",
        ))
        .stdout(predicate::str::contains("Found 1 issue(s): 1 error(s), 0 warning(s)"))
        .stdout(predicate::str::contains("[strict]"));
}

#[test]
fn test_lint_warnings_exit_0() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "governance/policy.md",
        "# Purpose\n\n# Scope\n\nOwners **must** approve.\n",
    );

    cargo_bin_cmd!("stricture")
        .current_dir(temp_dir.path())
        .args(["lint", "governance/policy.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[moderate-headings]"))
        .stdout(predicate::str::contains("[moderate-markdown]"))
        .stdout(predicate::str::contains("0 error(s), 2 warning(s)"));
}

#[test]
fn test_lint_strict_warnings_exit_1() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "governance/policy.md",
        "# Purpose\n\n# Scope\n\nOwners **must** approve.\n",
    );

    cargo_bin_cmd!("stricture")
        .current_dir(temp_dir.path())
        .args(["lint", "--strict-warnings", "governance/policy.md"])
        .assert()
        .code(1);
}

#[test]
fn test_lint_missing_file_exit_2() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "commands/deploy.md", &compliant_strict());

    cargo_bin_cmd!("stricture")
        .current_dir(temp_dir.path())
        .args(["lint", "commands/deploy.md", "commands/missing.md"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("no issues found"))
        .stderr(predicate::str::contains("failed to read commands/missing.md"));
}

#[test]
fn test_lint_root_option() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project");
    let file = write(&project, "rules/naming.md", "Plain prose here.\n");

    // Relative to the temp dir the file is light; relative to the project
    // it is a strict rule document.
    cargo_bin_cmd!("stricture")
        .current_dir(temp_dir.path())
        .args(["lint", "--quiet"])
        .arg(&file)
        .assert()
        .success();

    cargo_bin_cmd!("stricture")
        .current_dir(temp_dir.path())
        .args(["lint", "--quiet", "--root", "project"])
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[no-narrative]"));
}

#[test]
fn test_lint_config_word_lists() {
    let temp_dir = TempDir::new().unwrap();
    let mut content = compliant_strict();
    content.push_str("Use caching where you should.\n");
    write(temp_dir.path(), "commands/deploy.md", &content);
    fs::write(
        temp_dir.path().join("stricture.toml"),
        "[vocabulary]\nmodal-verbs = [\"should\"]\n",
    )
    .unwrap();

    cargo_bin_cmd!("stricture")
        .current_dir(temp_dir.path())
        .args(["lint", "commands/deploy.md"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[no-modal-verbs]"));
}

#[test]
fn test_lint_invalid_config_exit_2() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "commands/deploy.md", &compliant_strict());
    let config = temp_dir.path().join("custom.toml");
    fs::write(&config, "max-line-length = \"long\"\n").unwrap();

    cargo_bin_cmd!("stricture")
        .current_dir(temp_dir.path())
        .args(["lint", "--config"])
        .arg(&config)
        .arg("commands/deploy.md")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_lint_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let mut content = compliant_strict();
    content.push_str("Ship it 🚀\n");
    write(temp_dir.path(), "commands/deploy.md", &content);
    write(temp_dir.path(), "docs/guide.md", "Fine.\n");

    let output = cargo_bin_cmd!("stricture")
        .current_dir(temp_dir.path())
        .args(["lint", "--format", "json", "commands/deploy.md", "docs/guide.md"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["path"], "commands/deploy.md");
    assert_eq!(files[0]["tier"], "strict");

    let codes: Vec<&str> = files[0]["diagnostics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["no-emoji", "no-narrative"]);
    assert_eq!(files[0]["diagnostics"][0]["severity"], "error");
    assert_eq!(files[0]["diagnostics"][0]["line"], 41);

    assert_eq!(files[1]["tier"], "light");
    assert_eq!(files[1]["diagnostics"].as_array().unwrap().len(), 0);
    assert_eq!(json["summary"]["errors"], 2);
    assert_eq!(json["summary"]["by_rule"]["no-emoji"], 1);
}
