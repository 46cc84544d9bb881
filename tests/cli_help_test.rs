//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("candsync")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Import candidatures from a static JSON file",
        ))
        .stdout(predicate::str::contains("Import candidatures from the JSON resource"))
        .stdout(predicate::str::contains("Show stored candidatures"))
        .stdout(predicate::str::contains("Remove the stored state"));
}

#[test]
fn test_import_help() {
    Command::cargo_bin("candsync")
        .unwrap()
        .args(["import", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--store"));
}

#[test]
fn test_show_help() {
    Command::cargo_bin("candsync")
        .unwrap()
        .args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_reset_help() {
    Command::cargo_bin("candsync")
        .unwrap()
        .args(["reset", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--key"));
}

#[test]
fn test_unknown_command_fails() {
    Command::cargo_bin("candsync")
        .unwrap()
        .arg("export")
        .assert()
        .failure();
}
