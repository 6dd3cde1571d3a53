//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("fancy-lists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Roman numerals"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("fancy-lists")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("fancy-lists")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("fancy-lists")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_parse_help() {
    cargo_bin_cmd!("fancy-lists")
        .args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--allow-ordinal"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_markers_help() {
    cargo_bin_cmd!("fancy-lists")
        .args(["markers", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Classify the list marker"));
}

#[test]
fn test_missing_input_file() {
    cargo_bin_cmd!("fancy-lists")
        .args(["parse", "does-not-exist.md"])
        .assert()
        .failure();
}
