//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("brushset")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Batch image importer"));
}

#[test]
fn test_import_help() {
    Command::cargo_bin("brushset")
        .unwrap()
        .args(["import", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--fake-user"))
        .stdout(predicate::str::contains("--overwrite"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_list_help() {
    Command::cargo_bin("brushset")
        .unwrap()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--images"));
}

#[test]
fn test_purge_help() {
    Command::cargo_bin("brushset")
        .unwrap()
        .args(["purge", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_unknown_subcommand_fails() {
    Command::cargo_bin("brushset")
        .unwrap()
        .arg("export")
        .assert()
        .failure();
}
