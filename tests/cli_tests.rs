//! Integration tests for the `jsmith` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the binary
//! through stdin/stdout piping, file I/O, mode selection, and error
//! reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn compact_from_stdin() {
    Command::cargo_bin("jsmith")
        .unwrap()
        .arg("--compact")
        .write_stdin(r#"{ "a": 1, "b": [1, 2, 3] }"#)
        .assert()
        .success()
        .stdout("{\"a\":1,\"b\":[1,2,3]}\n");
}

#[test]
fn pretty_from_stdin() {
    Command::cargo_bin("jsmith")
        .unwrap()
        .arg("--pretty")
        .write_stdin(r#"{"a":1}"#)
        .assert()
        .success()
        .stdout("{\n\t\"a\":\t1\n}\n");
}

#[test]
fn piped_output_defaults_to_compact() {
    // assert_cmd captures stdout, so the binary does not see a terminal.
    Command::cargo_bin("jsmith")
        .unwrap()
        .write_stdin(r#"{"a": 1}"#)
        .assert()
        .success()
        .stdout("{\"a\":1}\n");
}

#[test]
fn member_order_survives_the_round_trip() {
    Command::cargo_bin("jsmith")
        .unwrap()
        .arg("--compact")
        .write_stdin(r#"{"z": 1, "a": 2}"#)
        .assert()
        .success()
        .stdout("{\"z\":1,\"a\":2}\n");
}

#[test]
fn file_input_and_output() {
    let dir = std::env::temp_dir();
    let input = dir.join("jsmith-test-input.json");
    let output = dir.join("jsmith-test-output.json");
    std::fs::write(&input, "{\"k\": [true, null]}").unwrap();
    let _ = std::fs::remove_file(&output);

    Command::cargo_bin("jsmith")
        .unwrap()
        .arg("--compact")
        .arg("-o")
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "{\"k\":[true,null]}\n"
    );
}

#[test]
fn invalid_json_reports_an_error() {
    Command::cargo_bin("jsmith")
        .unwrap()
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("jsmith:"));
}

#[test]
fn missing_input_file_reports_the_path() {
    Command::cargo_bin("jsmith")
        .unwrap()
        .arg("/definitely/not/here.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn compact_and_pretty_flags_conflict() {
    Command::cargo_bin("jsmith")
        .unwrap()
        .args(["--compact", "--pretty"])
        .write_stdin("{}")
        .assert()
        .failure();
}
