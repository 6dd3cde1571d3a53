//! Markers subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_markers_threads_context() {
    cargo_bin_cmd!("fancy-lists")
        .arg("markers")
        .write_stdin("iv. four\nv. five\n\nvi. six\n")
        .assert()
        .success()
        .stdout(
            "1: iv. lower_roman 4 (new list)\n\
             2: v. lower_roman 5\n\
             4: vi. lower_roman 6\n",
        );
}

#[test]
fn test_markers_single_letters() {
    cargo_bin_cmd!("fancy-lists")
        .arg("markers")
        .write_stdin("v. five\n\nprose\n\n#) next\n")
        .assert()
        .success()
        .stdout(
            "1: v. lower_alpha 22 (new list)\n\
             5: #) wildcard 1 (new list)\n",
        );
}

#[test]
fn test_markers_skips_prose() {
    cargo_bin_cmd!("fancy-lists")
        .arg("markers")
        .write_stdin("B. Russell\nVV. foo\nplain text\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_markers_ordinal_flag() {
    cargo_bin_cmd!("fancy-lists")
        .args(["markers", "--allow-ordinal"])
        .write_stdin("1º) first\n")
        .assert()
        .success()
        .stdout("1: 1º) arabic 1 ordinal (new list)\n");
}

#[test]
fn test_markers_file_with_bullets() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("list.md");
    fs::write(&test_file, "* star\n- dash\n").unwrap();

    cargo_bin_cmd!("fancy-lists")
        .args(["markers", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1: * bullet_star 1 (new list)"))
        .stdout(predicate::str::contains("2: - bullet_dash 1 (new list)"));
}
