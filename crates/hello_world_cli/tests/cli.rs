//! End-to-end tests for the `hello_world` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn hello_cmd() -> Command {
    let mut cmd = Command::cargo_bin("hello_world").unwrap();
    // A RUST_LOG inherited from the environment would add log output.
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_default_greeting() {
    hello_cmd().assert().success().stdout("Hello, World!\n");
}

#[test]
fn writes_nothing_to_stderr() {
    hello_cmd()
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
