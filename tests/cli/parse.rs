//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("fancy-lists")
        .arg("parse")
        .write_stdin("c. charlie\nd. delta\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ordered_list_open type=\"a\" start=\"3\"",
        ))
        .stdout(predicate::str::contains("list_item_open [d]"));
}

#[test]
fn test_parse_file_outline() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "i. one\nii. two\n").unwrap();

    cargo_bin_cmd!("fancy-lists")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            "ordered_list_open type=\"i\"\n\
             \x20 list_item_open [i]\n\
             \x20   paragraph_open hidden\n\
             \x20     inline \"one\"\n\
             \x20   paragraph_close hidden\n\
             \x20 list_item_close\n\
             \x20 list_item_open [ii]\n\
             \x20   paragraph_open hidden\n\
             \x20     inline \"two\"\n\
             \x20   paragraph_close hidden\n\
             \x20 list_item_close\n\
             ordered_list_close\n",
        );
}

#[test]
fn test_parse_json() {
    cargo_bin_cmd!("fancy-lists")
        .args(["parse", "--format", "json"])
        .write_stdin("A) alpha\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"ordered_list_open\""))
        .stdout(predicate::str::contains("\"info\": \"A\""))
        .stdout(predicate::str::contains("\"hidden\": true"));
}

#[test]
fn test_parse_ordinal_requires_opt_in() {
    cargo_bin_cmd!("fancy-lists")
        .arg("parse")
        .write_stdin("1º. first\n2º. second\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ordered_list_open").not());

    cargo_bin_cmd!("fancy-lists")
        .args(["parse", "--allow-ordinal"])
        .write_stdin("1º. first\n2º. second\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ordered_list_open class=\"ordinal\"",
        ));
}

#[test]
fn test_parse_discovers_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "AA) foo\nAB) bar\n").unwrap();
    fs::write(
        temp_dir.path().join(".fancy-lists.toml"),
        "[lists]\nallow_multi_letter = true\n",
    )
    .unwrap();

    cargo_bin_cmd!("fancy-lists")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ordered_list_open type=\"A\" start=\"27\"",
        ));
}

#[test]
fn test_parse_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(&config_file, "[lists]\nallow_ordinal = true\n").unwrap();

    cargo_bin_cmd!("fancy-lists")
        .args(["parse", "--config", config_file.to_str().unwrap()])
        .write_stdin("IIº. foo\nIIIº. bar\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ordered_list_open type=\"I\" start=\"2\" class=\"ordinal\"",
        ));
}

#[test]
fn test_parse_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    fs::write(&config_file, "lists = 3\n").unwrap();

    cargo_bin_cmd!("fancy-lists")
        .args(["parse", "--config", config_file.to_str().unwrap()])
        .write_stdin("a. foo\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_parse_handles_crlf() {
    cargo_bin_cmd!("fancy-lists")
        .arg("parse")
        .write_stdin("a. one\r\nb. two\r\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("list_item_open [b]"))
        .stdout(predicate::str::contains("\\r").not());
}
