#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn keepmd_cmd(cwd: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo_bin("keepmd"));
    cmd.current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("KEEPMD_TAG_PREFIX")
        .env_remove("KEEPMD_COLOR_TAGS")
        .env_remove("KEEPMD_CONVERT_TRASHED")
        .env_remove("KEEPMD_CONVERT_ARCHIVED")
        .env_remove("KEEPMD_OVERWRITE");
    cmd
}

fn write_export(temp: &TempDir) -> std::path::PathBuf {
    let source = temp.path().join("Takeout").join("Keep");
    fs::create_dir_all(&source).unwrap();
    fs::write(
        source.join("Groceries.json"),
        r#"{"textContent": "Buy milk", "color": "DEFAULT", "labels": [{"name": "errands"}], "isTrashed": false, "isArchived": false}"#,
    )
    .unwrap();
    fs::write(
        source.join("Photo.json"),
        r#"{"color": "RED", "attachments": [{"filePath": "cat.png"}, {"filePath": "dog.png"}], "isTrashed": false, "isArchived": false}"#,
    )
    .unwrap();
    fs::write(source.join("cat.png"), b"meow").unwrap();
    fs::write(
        source.join("Archived.json"),
        r#"{"textContent": "old", "isTrashed": false, "isArchived": true}"#,
    )
    .unwrap();
    fs::write(source.join("Broken.json"), "{{{").unwrap();
    source
}

#[test]
fn test_convert_full_workflow() {
    let temp = TempDir::new().unwrap();
    let source = write_export(&temp);
    let notes = temp.path().join("vault").join("Keep");

    // 1. First run converts everything it can
    keepmd_cmd(temp.path())
        .args(["--source-path", source.to_str().unwrap()])
        .args(["--target-path", "vault", "--folder-name", "Keep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 4 .json files"))
        .stdout(predicate::str::contains("dog.png"))
        .stdout(predicate::str::contains("Broken.json"))
        .stdout(predicate::str::contains("Converted 2 notes!"));

    assert_eq!(
        fs::read_to_string(notes.join("Groceries.md")).unwrap(),
        "Buy milk\n\n#errands"
    );
    assert_eq!(
        fs::read_to_string(notes.join("Photo.md")).unwrap(),
        "![[images/cat.png]]\n#RED"
    );
    assert_eq!(fs::read(notes.join("images").join("cat.png")).unwrap(), b"meow");
    assert!(!notes.join("Archived.md").exists());
    assert!(!notes.join("Broken.md").exists());

    // 2. Second run skips what exists and picks up archived notes on request
    keepmd_cmd(temp.path())
        .args(["--source-path", source.to_str().unwrap()])
        .args(["--target-path", "vault", "--folder-name", "Keep"])
        .arg("--convert-archived")
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 1 notes!"));

    assert_eq!(
        fs::read_to_string(notes.join("Archived.md")).unwrap(),
        "old\n\n"
    );
}

#[test]
fn test_tag_prefix_and_no_color_tags() {
    let temp = TempDir::new().unwrap();
    let source = write_export(&temp);

    keepmd_cmd(temp.path())
        .args(["--source-path", source.to_str().unwrap()])
        .args(["--folder-name", "Out", "--super-tag", "keep", "--no-color-tags"])
        .assert()
        .success();

    let out = temp.path().join("Out");
    assert_eq!(
        fs::read_to_string(out.join("Groceries.md")).unwrap(),
        "Buy milk\n\n#keep/errands"
    );
    assert_eq!(
        fs::read_to_string(out.join("Photo.md")).unwrap(),
        "![[images/cat.png]]\n"
    );
}

#[test]
fn test_config_file_defaults() {
    let temp = TempDir::new().unwrap();
    let source = write_export(&temp);
    fs::write(
        temp.path().join("keepmd.toml"),
        "tag_prefix = \"imported\"\nconvert_archived = true\n",
    )
    .unwrap();

    keepmd_cmd(temp.path())
        .args(["--source-path", source.to_str().unwrap()])
        .args(["--folder-name", "Out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 3 notes!"));

    assert_eq!(
        fs::read_to_string(temp.path().join("Out").join("Photo.md")).unwrap(),
        "![[images/cat.png]]\n#imported/RED"
    );
}

#[test]
fn test_json_report() {
    let temp = TempDir::new().unwrap();
    let source = write_export(&temp);

    let output = keepmd_cmd(temp.path())
        .args(["--source-path", source.to_str().unwrap()])
        .args(["--folder-name", "Out", "--output", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["found"], 4);
    assert_eq!(report["converted"], 2);
    assert_eq!(report["skipped_archived"], 1);
    assert_eq!(report["failed"], 1);
}

#[test]
fn test_missing_source_fails() {
    let temp = TempDir::new().unwrap();

    keepmd_cmd(temp.path())
        .args(["--source-path", "does-not-exist", "--folder-name", "Out"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: --source-path does-not-exist does not exist",
        ));

    assert!(!temp.path().join("Out").exists());
}

#[test]
fn test_missing_folder_name_is_usage_error() {
    let temp = TempDir::new().unwrap();

    keepmd_cmd(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--folder-name"));
}
