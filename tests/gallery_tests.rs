//! Integration tests for the gallery command

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
fn test_gallery_empty() {
    let temp = init_journal();

    momo_cmd()
        .current_dir(temp.path())
        .arg("gallery")
        .assert()
        .success()
        .stdout(predicate::str::contains("No photos yet"));
}

#[test]
fn test_gallery_shows_only_photo_entries() {
    let temp = init_journal();
    let photo = temp.path().join("photo.png");
    image::RgbImage::new(32, 32).save(&photo).unwrap();

    momo_cmd()
        .current_dir(temp.path())
        .args(["add", "text only", "--date", "2025-01-17"])
        .assert()
        .success();

    momo_cmd()
        .current_dir(temp.path())
        .args(["add", "with a photo", "--date", "2025-01-18", "--location", "Seoul"])
        .arg("--image")
        .arg(&photo)
        .assert()
        .success();

    momo_cmd()
        .current_dir(temp.path())
        .arg("gallery")
        .assert()
        .success()
        .stdout(predicate::str::contains("with a photo"))
        .stdout(predicate::str::contains("@ Seoul"))
        .stdout(predicate::str::contains("text only").not());
}

#[test]
fn test_gallery_newest_first() {
    let temp = init_journal();
    let photo = temp.path().join("photo.png");
    image::RgbImage::new(32, 32).save(&photo).unwrap();

    for (text, date) in [("older", "2025-01-10"), ("newer", "2025-01-20")] {
        momo_cmd()
            .current_dir(temp.path())
            .args(["add", text, "--date", date])
            .arg("--image")
            .arg(&photo)
            .assert()
            .success();
    }

    let output = momo_cmd()
        .current_dir(temp.path())
        .arg("gallery")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    // Creation order drives the gallery: the later add comes first
    assert!(stdout.find("newer").unwrap() < stdout.find("older").unwrap());
}
