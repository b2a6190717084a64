//! Integration tests for the subcmd binary

mod common;

use assert_cmd::Command;
use common::create_settings_file;
use predicates::prelude::*;

fn subcmd() -> Command {
    let mut cmd = Command::cargo_bin("subcmd").unwrap();
    cmd.env_remove("SUBCMD_LOG");
    cmd
}

#[test]
fn test_no_arguments_prints_usage() {
    subcmd()
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::starts_with(
            "Usage: subcmd [global options] <subcommand> [subcommand arguments]\n",
        ))
        .stderr(predicate::str::contains("Commands:\n\techo\t\tprint arguments\n"));
}

#[test]
fn test_echo() {
    subcmd()
        .args(["echo", "-sep", "-", "a", "b", "c"])
        .assert()
        .success()
        .stdout("a-b-c\n")
        .stderr("");
}

#[test]
fn test_unknown_command_exits_2() {
    subcmd()
        .arg("nope")
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("Error: No such command: \"nope\"\n\n"));
}

#[test]
fn test_bad_flag_exits_2() {
    subcmd()
        .args(["echo", "-x"])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("flag provided but not defined: -x\n"))
        .stderr(predicate::str::contains("Options:\n"));
}

#[test]
fn test_command_failure_exits_1() {
    subcmd()
        .args(["env", "SUBCMD_CLI_TEST_SURELY_UNSET"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "environment variable SUBCMD_CLI_TEST_SURELY_UNSET is not set",
        ));
}

#[test]
fn test_env_prints_variable() {
    subcmd()
        .args(["env", "SUBCMD_CLI_TEST_VALUE"])
        .env("SUBCMD_CLI_TEST_VALUE", "42")
        .assert()
        .success()
        .stdout("SUBCMD_CLI_TEST_VALUE=42\n");
}

#[test]
fn test_settings_file_help_and_output() {
    let (_dir, path) = create_settings_file("help: From settings.\noutput: stdout\n");

    subcmd()
        .args(["-config", path.to_str().unwrap(), "help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\nFrom settings.\n"))
        .stderr("");
}

#[test]
fn test_settings_file_discovered_in_working_dir() {
    let (dir, _path) = create_settings_file("help: Found by walking up.\n");

    subcmd()
        .current_dir(dir.path())
        .arg("help")
        .assert()
        .success()
        .stderr(predicate::str::contains("\nFound by walking up.\n"));
}

#[test]
fn test_invalid_settings_file() {
    let (_dir, path) = create_settings_file("log: \"subcmd=loud\"\n");

    subcmd()
        .args(["-config", path.to_str().unwrap(), "help"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error: Invalid settings"));
}

#[test]
fn test_help_for_command() {
    subcmd()
        .args(["help", "echo"])
        .assert()
        .success()
        .stderr(predicate::str::starts_with("Usage: echo [options] [arg...]\n"))
        .stderr(predicate::str::contains(
            "  -sep text\n    \tprint text between arguments (default \" \")\n",
        ));
}
