// Integration tests for the credit-eval CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and side effects.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the credit-eval binary.
fn credit_eval() -> Command {
    Command::cargo_bin("credit-eval").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    credit_eval()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("credit-eval"));
}

#[test]
fn cli_help_flag() {
    credit_eval()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Participation credit"));
}

#[test]
fn evaluate_requires_path() {
    credit_eval()
        .arg("evaluate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn evaluate_requires_workshop() {
    credit_eval()
        .args(["evaluate", "/tmp/test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--workshop"));
}

#[test]
fn calculate_requires_mode() {
    credit_eval()
        .args(["calculate", "map.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--mode"));
}

#[test]
fn evaluate_rejects_unknown_mode_value() {
    credit_eval()
        .args(["evaluate", "/tmp/test", "--workshop", "1", "--mode", "best"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    credit_eval()
        .args(["-q", "-v", "calculate", "map.json", "--mode", "all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
