use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("covmap").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("covmap"));
}

#[test]
fn cli_rejects_unknown_format() {
    let mut cmd = Command::cargo_bin("covmap").unwrap();
    cmd.args(["get", "--format", "xml"]);
    cmd.assert().failure();
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn fetch_online_and_print_stats() {
    let mut cmd = Command::cargo_bin("covmap").unwrap();
    cmd.args(["get", "--stats"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total Cases"));
}
