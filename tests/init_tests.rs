//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::moodstar_cmd;

#[test]
fn test_init_creates_config_and_journal() {
    let temp = TempDir::new().unwrap();

    moodstar_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized moodstar journal"));

    assert!(temp.path().join(".moodstar").is_dir());

    let config = fs::read_to_string(temp.path().join(".moodstar/config.toml")).unwrap();
    assert!(config.contains("log_level = \"warn\""));
    assert!(config.contains("popular_tags_limit = 10"));

    let journal = fs::read_to_string(temp.path().join(".moodstar/journal.json")).unwrap();
    assert_eq!(journal.trim(), "[]");
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    moodstar_cmd().arg("init").arg(temp.path()).assert().success();
    moodstar_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_command_outside_journal_fails() {
    let temp = TempDir::new().unwrap();

    moodstar_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("moodstar init"));
}

#[test]
fn test_moodstar_root_env() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    moodstar_cmd().arg("init").arg(temp.path()).assert().success();

    moodstar_cmd()
        .current_dir(elsewhere.path())
        .env("MOODSTAR_ROOT", temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_config_get_and_set() {
    let temp = TempDir::new().unwrap();

    moodstar_cmd().arg("init").arg(temp.path()).assert().success();

    moodstar_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("popular_tags_limit")
        .assert()
        .success()
        .stdout(predicate::str::contains("10"));

    moodstar_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("popular_tags_limit")
        .arg("3")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set popular_tags_limit = 3"));

    moodstar_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("popular_tags_limit = 3"))
        .stdout(predicate::str::contains("log_level = warn"));
}

#[test]
fn test_config_rejects_invalid_log_level() {
    let temp = TempDir::new().unwrap();

    moodstar_cmd().arg("init").arg(temp.path()).assert().success();

    moodstar_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("log_level")
        .arg("loud")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid levels"));
}
