//! Integration tests for write, list and delete commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{moodstar_cmd, write_entry};

fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    moodstar_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_write_prints_tags_and_star() {
    let temp = init_journal();

    moodstar_cmd()
        .current_dir(temp.path())
        .arg("write")
        .arg("--emotion")
        .arg("평온")
        .arg("아침")
        .arg("요가")
        .arg("#루틴")
        .assert()
        .success()
        .stdout(predicate::str::contains("아침 요가 #루틴"))
        .stdout(predicate::str::contains("tags: #루틴"))
        .stdout(predicate::str::contains("[운동]"))
        .stdout(predicate::str::contains("star: "))
        .stdout(predicate::str::contains("id: "));
}

#[test]
fn test_write_persists_camel_case_json() {
    let temp = init_journal();
    let id = write_entry(temp.path(), "joy", "친구랑 #맛집 탐방");

    let journal = fs::read_to_string(temp.path().join(".moodstar/journal.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&journal).unwrap();
    let entry = &value[0];

    assert_eq!(entry["id"], id.as_str());
    assert_eq!(entry["emotion"], "기쁨");
    assert_eq!(entry["hashtags"][0], "맛집");
    assert_eq!(entry["autoTags"][0], "친구");
    assert_eq!(entry["star"]["entryId"], id.as_str());
    assert!(entry["star"]["createdAt"].is_string());
}

#[test]
fn test_write_invalid_emotion() {
    let temp = init_journal();

    moodstar_cmd()
        .current_dir(temp.path())
        .arg("write")
        .arg("-e")
        .arg("불명")
        .arg("내용")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Valid emotions"));
}

#[test]
fn test_list_newest_first_with_filters() {
    let temp = init_journal();
    write_entry(temp.path(), "기쁨", "첫번째 글");
    write_entry(temp.path(), "슬픔", "두번째 글");
    write_entry(temp.path(), "기쁨", "세번째 글");

    let output = moodstar_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("세번째"));
    assert!(lines[2].contains("첫번째"));

    moodstar_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--emotion")
        .arg("sadness")
        .assert()
        .success()
        .stdout(predicate::str::contains("두번째"))
        .stdout(predicate::str::contains("첫번째").not());

    let output = moodstar_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("-n")
        .arg("2")
        .output()
        .unwrap();
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 2);
}

#[test]
fn test_delete_entry() {
    let temp = init_journal();
    let keep = write_entry(temp.path(), "평온", "남는 글");
    let gone = write_entry(temp.path(), "화남", "지우는 글");

    moodstar_cmd()
        .current_dir(temp.path())
        .arg("delete")
        .arg(&gone)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted entry {}", gone)));

    moodstar_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(keep.as_str()))
        .stdout(predicate::str::contains(gone.as_str()).not());

    moodstar_cmd()
        .current_dir(temp.path())
        .arg("delete")
        .arg(&gone)
        .assert()
        .code(4);
}
