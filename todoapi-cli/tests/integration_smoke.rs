//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("todoapi").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("todoapi").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("DATABASE_URL"))
        .stdout(predicate::str::contains("PORT"));
}

#[test]
fn test_serve_requires_database_url() {
    let dir = std::env::temp_dir();
    let mut cmd = Command::cargo_bin("todoapi").unwrap();
    cmd.current_dir(dir).env_remove("DATABASE_URL").arg("serve");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--database-url"));
}

#[test]
fn test_serve_rejects_bad_port() {
    let mut cmd = Command::cargo_bin("todoapi").unwrap();
    cmd.args(["serve", "--database-url", "postgres://localhost/todos", "--port", "99999"]);

    cmd.assert().failure();
}

#[test]
fn test_serve_fails_on_malformed_database_url() {
    let mut cmd = Command::cargo_bin("todoapi").unwrap();
    cmd.args(["serve", "--database-url", "not a url", "--port", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create database pool"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("todoapi").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("todoapi"));
}
