//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_journal, moodlog_cmd, moodlog_in};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized moodlog journal"));

    assert!(temp.path().join(".moodlog").is_dir());
    assert!(temp.path().join(".moodlog/store").is_dir());

    let content = fs::read_to_string(temp.path().join(".moodlog/config.toml")).unwrap();
    assert!(content.contains("storage_key = \"diary-storage\""));
    assert!(content.contains("week_start = \"monday\""));
}

#[test]
fn test_init_with_sunday_week() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--week-start")
        .arg("sunday")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".moodlog/config.toml")).unwrap();
    assert!(content.contains("week_start = \"sunday\""));
}

#[test]
fn test_init_invalid_week_start() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--week-start")
        .arg("friday")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid week starts"));

    assert!(!temp.path().join(".moodlog").exists());
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    init_journal(temp.path());

    moodlog_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_commands_outside_journal_fail() {
    let temp = TempDir::new().unwrap();

    moodlog_in(temp.path())
        .arg("streak")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("moodlog init"));
}

#[test]
fn test_moodlog_root_env() {
    let journal = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init_journal(journal.path());

    moodlog_in(elsewhere.path())
        .env("MOODLOG_ROOT", journal.path())
        .args(["write", "From elsewhere", "--mood", "6", "--date", "2025-03-01"])
        .assert()
        .success();

    assert!(journal
        .path()
        .join(".moodlog/store/diary-storage.json")
        .exists());
}

#[test]
fn test_moodlog_root_env_without_journal() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .env("MOODLOG_ROOT", temp.path())
        .arg("streak")
        .assert()
        .failure()
        .stderr(predicate::str::contains("MOODLOG_ROOT is set"));
}

#[test]
fn test_config_get_and_set_week_start() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_in(temp.path())
        .args(["config", "week_start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("monday"));

    moodlog_in(temp.path())
        .args(["config", "week_start", "sunday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set week_start = sunday"));

    moodlog_in(temp.path())
        .args(["config", "week_start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sunday"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_in(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage_key = diary-storage"))
        .stdout(predicate::str::contains("week_start = monday"));
}

#[test]
fn test_config_unknown_key() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_in(temp.path())
        .args(["config", "created"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'created'"));
}

#[test]
fn test_storage_key_switch_starts_empty_view() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_in(temp.path())
        .args(["write", "Original", "--mood", "5", "--date", "2025-03-01"])
        .assert()
        .success();

    moodlog_in(temp.path())
        .args(["config", "storage_key", "other-journal"])
        .assert()
        .success();

    moodlog_in(temp.path())
        .args(["show", "2025-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry for 2025-03-01"));

    assert!(temp
        .path()
        .join(".moodlog/store/diary-storage.json")
        .exists());
}

#[test]
fn test_invalid_storage_key_is_rejected_and_writes_still_persist() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_in(temp.path())
        .args(["config", "storage_key", "my/moods"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid storage_key: 'my/moods'"));

    moodlog_in(temp.path())
        .args(["write", "Kept", "--mood", "5", "--date", "2025-03-01"])
        .assert()
        .success()
        .stderr(predicate::str::contains("could not be saved").not());

    moodlog_in(temp.path())
        .args(["show", "2025-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept"));
}
