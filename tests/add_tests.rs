//! Integration tests for the add command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::momo_cmd;

fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    momo_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_add_text_entry() {
    let temp = init_journal();

    momo_cmd()
        .current_dir(temp.path())
        .args(["add", "a quiet afternoon", "--date", "2025-01-17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved entry"))
        .stdout(predicate::str::contains("2025-01-17"));

    momo_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("a quiet afternoon"));
}

#[test]
fn test_add_empty_entry_fails() {
    let temp = init_journal();

    momo_cmd()
        .current_dir(temp.path())
        .arg("add")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("needs some text or a photo"));

    momo_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No moments found"));
}

#[test]
fn test_add_whitespace_only_text_fails() {
    let temp = init_journal();

    momo_cmd()
        .current_dir(temp.path())
        .args(["add", "   "])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_add_fills_defaults() {
    let temp = init_journal();

    momo_cmd()
        .current_dir(temp.path())
        .args(["add", "plain moment", "--date", "2025-01-17"])
        .assert()
        .success();

    momo_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("@ Unknown"))
        .stdout(predicate::str::contains("#Daily"))
        .stdout(predicate::str::contains("happy"));
}

#[test]
fn test_add_with_explicit_fields() {
    let temp = init_journal();

    momo_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "by the sea",
            "--date",
            "2025-01-17",
            "--location",
            "Cinque Terre",
            "--mood",
            "calm",
            "--tag",
            "#看海",
            "--tag",
            "#治愈",
        ])
        .assert()
        .success();

    momo_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("@ Cinque Terre"))
        .stdout(predicate::str::contains("calm"))
        .stdout(predicate::str::contains("#看海 #治愈"));
}

#[test]
fn test_add_extracts_hashtags_from_text() {
    let temp = init_journal();

    momo_cmd()
        .current_dir(temp.path())
        .args(["add", "a day at the #sea", "--date", "2025-01-17"])
        .assert()
        .success();

    momo_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("#sea"))
        .stdout(predicate::str::contains("#Daily").not());
}

#[test]
fn test_add_invalid_date_fails() {
    let temp = init_journal();

    momo_cmd()
        .current_dir(temp.path())
        .args(["add", "hello", "--date", "17/01/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"))
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_add_invalid_mood_fails() {
    let temp = init_journal();

    momo_cmd()
        .current_dir(temp.path())
        .args(["add", "hello", "--mood", "grumpy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mood"));
}

#[test]
fn test_add_with_image() {
    let temp = init_journal();
    let photo = temp.path().join("photo.png");
    image::RgbImage::new(64, 48).save(&photo).unwrap();

    momo_cmd()
        .current_dir(temp.path())
        .args(["add", "--date", "2025-01-17"])
        .arg("--image")
        .arg(&photo)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved entry"));

    momo_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[photo]"));
}

#[test]
fn test_add_with_unreadable_image_fails() {
    let temp = init_journal();
    let bogus = temp.path().join("broken.jpg");
    std::fs::write(&bogus, "not an image").unwrap();

    momo_cmd()
        .current_dir(temp.path())
        .arg("add")
        .arg("--image")
        .arg(&bogus)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image decode error").or(
            predicate::str::contains("failed to decode image"),
        ));

    momo_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No moments found"));
}
