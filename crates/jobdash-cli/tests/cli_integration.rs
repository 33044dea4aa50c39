use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("jobdash").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("completions"))
        .stdout(predicate::str::contains("--base-url"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("jobdash").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jobdash"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("jobdash").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jobdash"));
}

#[test]
fn test_search_against_unreachable_host_fails_cleanly() {
    let mut cmd = Command::cargo_bin("jobdash").unwrap();
    cmd.args([
        "--base-url",
        "http://127.0.0.1:1/wp-json/wp/v2",
        "search",
        "qa",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("\"success\":false"));
}
