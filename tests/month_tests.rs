//! Integration tests for the month command

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{init_journal, moodlog_in};

fn journal_with_march() -> TempDir {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    for (date, mood, text) in [
        ("2025-03-31", "9", "End of March"),
        ("2025-04-01", "2", "April fool"),
        ("2025-03-01", "4", "Start of March"),
        ("2025-03-15", "7", "Mid March"),
    ] {
        moodlog_in(temp.path())
            .args(["write", text, "--mood", mood, "--date", date])
            .assert()
            .success();
    }

    temp
}

#[test]
fn test_month_list_filters_and_orders() {
    let temp = journal_with_march();

    let output = moodlog_in(temp.path())
        .args(["month", "2025-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("April fool").not())
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let first = stdout.find("2025-03-01").unwrap();
    let mid = stdout.find("2025-03-15").unwrap();
    let last = stdout.find("2025-03-31").unwrap();
    assert!(first < mid && mid < last);
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn test_month_without_entries() {
    let temp = journal_with_march();

    moodlog_in(temp.path())
        .args(["month", "2025-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_month_calendar() {
    let temp = journal_with_march();

    moodlog_in(temp.path())
        .args(["month", "2025-03", "--calendar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("March 2025"))
        .stdout(predicate::str::contains(" 1[4]"))
        .stdout(predicate::str::contains("15[7]"))
        .stdout(predicate::str::contains("31[9]"));
}

#[test]
fn test_month_json() {
    let temp = journal_with_march();

    let output = moodlog_in(temp.path())
        .args(["month", "2025-04", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["date"], "2025-04-01");
    assert_eq!(entries[0]["label"], "very bad");
    assert_eq!(entries[0]["color"], "#dd6b20");
}

#[test]
fn test_month_invalid_reference() {
    let temp = journal_with_march();

    moodlog_in(temp.path())
        .args(["month", "2025-13"])
        .assert()
        .code(3);
}
