//! Tests for exit codes and error suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn snipgen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("snipgen").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"));
    cmd
}

#[test]
fn help_exits_zero() {
    let dir = TempDir::new().unwrap();
    snipgen(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("scopes"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    snipgen(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn argument_errors_exit_two() {
    let dir = TempDir::new().unwrap();
    snipgen(&dir)
        .args(["--quiet", "--verbose", "scopes"])
        .assert()
        .code(2);

    snipgen(&dir)
        .args(["render", "-b", "x", "--body-file", "y"])
        .assert()
        .code(2);
}

#[test]
fn missing_form_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    snipgen(&dir)
        .args(["render", "--from", "absent.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn malformed_form_file_is_user_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.toml"), "name = ").unwrap();

    snipgen(&dir)
        .args(["render", "--from", "bad.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Cannot load form"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn missing_config_file_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    snipgen(&dir)
        .args(["--config", "nope.toml", "scopes"])
        .assert()
        .code(4);
}

#[test]
fn unknown_config_key_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    snipgen(&dir)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn interactive_without_terminal_is_rejected() {
    let dir = TempDir::new().unwrap();
    snipgen(&dir)
        .args(["render", "-i"])
        .write_stdin("")
        .assert()
        .failure();
}
