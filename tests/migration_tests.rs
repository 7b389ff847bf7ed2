//! Integration tests for the one-time legacy store migration

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::momo_cmd;

const LEGACY: &str = r##"[
  {"id": 1, "date": "2024-01-01", "image": null, "text": "from the old days",
   "mood": "calm", "location": "Rome", "tags": ["#sea"]},
  {"id": 2, "date": "2024-01-02", "image": null, "text": "also old",
   "mood": "tired", "location": "Unknown", "tags": ["#Daily"]}
]"##;

fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    momo_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_legacy_entries_are_migrated() {
    let temp = init_journal();
    fs::write(temp.path().join(".momo/entries.json"), LEGACY).unwrap();

    momo_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("from the old days"))
        .stdout(predicate::str::contains("also old"));

    // Legacy document archived and cleared, marker written
    assert!(!temp.path().join(".momo/entries.json").exists());
    assert!(temp.path().join(".momo/backup/entries.json").exists());
    assert!(temp.path().join(".momo/migrated").exists());
}

#[test]
fn test_migrated_entries_survive_further_commands() {
    let temp = init_journal();
    fs::write(temp.path().join(".momo/entries.json"), LEGACY).unwrap();

    // First command migrates, second reads the keyed store
    momo_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success();

    momo_cmd()
        .current_dir(temp.path())
        .args(["list", "--search", "sea"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from the old days"));
}

#[test]
fn test_migration_runs_once() {
    let temp = init_journal();
    fs::write(temp.path().join(".momo/entries.json"), LEGACY).unwrap();

    momo_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success();

    // A legacy file reappearing after the marker is left alone
    fs::write(
        temp.path().join(".momo/entries.json"),
        r#"[{"id": 9, "date": "2024-02-01", "text": "late arrival"}]"#,
    )
    .unwrap();

    momo_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("late arrival").not());

    assert!(temp.path().join(".momo/entries.json").exists());
}

#[test]
fn test_corrupt_legacy_file_is_left_alone() {
    let temp = init_journal();
    fs::write(temp.path().join(".momo/entries.json"), "{{corrupt").unwrap();

    momo_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No moments found"));

    assert!(temp.path().join(".momo/entries.json").exists());
    assert!(!temp.path().join(".momo/migrated").exists());
}

#[test]
fn test_migrated_backup_preserves_original_document() {
    let temp = init_journal();
    fs::write(temp.path().join(".momo/entries.json"), LEGACY).unwrap();

    momo_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success();

    let archived = fs::read_to_string(temp.path().join(".momo/backup/entries.json")).unwrap();
    assert_eq!(archived, LEGACY);
}
