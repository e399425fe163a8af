//! Integration tests for the check command.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn seam() -> Command {
    let mut cmd = Command::cargo_bin("seam").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn clean_tree_passes() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "alpha\n").unwrap();
    fs::write(temp.path().join("b.txt"), "require 'a.txt'\nbeta\n").unwrap();

    seam()
        .current_dir(temp.path())
        .args(["check", "."])
        .assert()
        .success()
        .stderr(predicate::str::contains("2 files, 1 dependency edges"))
        .stderr(predicate::str::contains("no cycles"));
}

#[test]
fn check_writes_no_files() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "alpha\n").unwrap();

    seam()
        .current_dir(temp.path())
        .args(["check", "."])
        .assert()
        .success();

    assert!(!temp.path().join("output.txt").exists());
}

#[test]
fn cycle_fails_the_check_with_exit_code_two() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "require 'b.txt'\n").unwrap();
    fs::write(temp.path().join("b.txt"), "require 'a.txt'\n").unwrap();

    seam()
        .current_dir(temp.path())
        .args(["check", "."])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Dependency cycle detected"));
}

#[test]
fn missing_dependencies_are_reported_but_pass() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("d.txt"), "require 'ghost.txt'\n").unwrap();

    seam()
        .current_dir(temp.path())
        .args(["check", "."])
        .assert()
        .success()
        .stderr(predicate::str::contains("ghost.txt"))
        .stderr(predicate::str::contains("1 missing dependencies"));
}

#[test]
fn order_flag_lists_the_emission_order() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "alpha\n").unwrap();
    fs::write(temp.path().join("b.txt"), "require 'a.txt'\nbeta\n").unwrap();

    seam()
        .current_dir(temp.path())
        .args(["check", ".", "--order"])
        .assert()
        .success()
        .stdout("a.txt\nb.txt\n");
}

#[test]
fn self_require_is_reported_as_a_cycle() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("loop.txt"), "require 'loop.txt'\n").unwrap();

    seam()
        .current_dir(temp.path())
        .args(["check", "."])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("loop.txt -> loop.txt"));
}
