//! Integration tests for the `gaz` binary.
//!
//! These tests exercise the full CLI flow: argument parsing, lookup, and
//! output formatting.

use assert_cmd::Command;
use predicates::prelude::*;

fn gaz() -> Command {
    Command::cargo_bin("gaz").expect("binary builds")
}

#[test]
fn lookup_resolves_alpha2() {
    gaz()
        .args(["lookup", "ru"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Russian Federation"))
        .stdout(predicate::str::contains("Alpha-3:  RUS"));
}

#[test]
fn lookup_resolves_numeric() {
    gaz()
        .args(["lookup", "643"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Russian Federation"));
}

#[test]
fn lookup_resolves_free_text_with_diacritics() {
    gaz()
        .args(["lookup", "Côte d'Ivoire"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CIV"));
}

#[test]
fn lookup_unknown_fails_with_error() {
    gaz()
        .args(["lookup", "atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown country"));
}

#[test]
fn lookup_json_is_machine_readable() {
    let output = gaz().args(["lookup", "--json", "nz"]).output().unwrap();
    assert!(output.status.success());
    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["alpha2"], "NZ");
    assert_eq!(info["code"], 554);
}

#[test]
fn list_includes_every_country_line() {
    gaz()
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("036  AU  AUS  Australia"))
        .stdout(predicate::str::contains("643  RU  RUS  Russian Federation"));
}

#[test]
fn list_filters_by_region() {
    gaz()
        .args(["list", "--region", "oceania"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Australia"))
        .stdout(predicate::str::contains("Fiji"))
        .stdout(predicate::str::contains("Germany").not());
}

#[test]
fn list_rejects_unknown_region() {
    gaz()
        .args(["list", "--region", "middle-earth"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown region"));
}

#[test]
fn regions_lists_all_seven() {
    gaz()
        .args(["regions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Africa"))
        .stdout(predicate::str::contains("South America"))
        .stdout(predicate::str::contains("150  Europe"));
}

#[test]
fn completion_generates_a_script() {
    gaz()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}
