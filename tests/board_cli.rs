use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;

fn corkboard(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("corkboard").unwrap();
    cmd.env("CORKBOARD_HOME", dir)
        .env("NO_COLOR", "1")
        .env_remove("CORKBOARD_LOG");
    cmd
}

fn record(dir: &Path) -> Value {
    let raw = std::fs::read_to_string(dir.join("canvas-storage.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn first_run_creates_default_page() {
    let temp_dir = tempfile::tempdir().unwrap();

    corkboard(temp_dir.path())
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::contains("Untitled Page"));

    let saved = record(temp_dir.path());
    assert_eq!(saved["pages"].as_array().unwrap().len(), 1);
    assert_eq!(saved["currentPageId"], saved["pages"][0]["id"]);
    assert_eq!(saved["isSidebarOpen"], true);
}

#[test]
fn notes_land_on_the_current_page() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();

    corkboard(dir)
        .args(["page", "add", "Ideas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page created: Ideas"));

    corkboard(dir)
        .args(["page", "use", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current page: Ideas"));

    corkboard(dir)
        .args([
            "note", "add", "buy", "milk", "--x", "10", "--y", "20", "--color", "yellow",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added"));

    corkboard(dir)
        .arg("notes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ideas"))
        .stdout(predicate::str::contains("buy milk"));

    let saved = record(dir);
    assert_eq!(saved["currentPageId"], saved["pages"][1]["id"]);
    assert!(saved["pages"][0]["notes"].as_array().unwrap().is_empty());
    let note = &saved["pages"][1]["notes"][0];
    assert_eq!(note["content"], "buy milk");
    assert_eq!(note["x"], 10.0);
    assert_eq!(note["y"], 20.0);
    assert_eq!(note["color"], "yellow");
    assert_eq!(note["rotation"], 0.0);
}

#[test]
fn note_changes_are_persisted() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();

    corkboard(dir)
        .args(["note", "add", "hello", "--x", "10", "--y", "20"])
        .assert()
        .success();

    corkboard(dir)
        .args(["note", "move", "1", "40", "-20", "--scale", "2"])
        .assert()
        .success();
    corkboard(dir)
        .args(["note", "rotate", "1", "-15"])
        .assert()
        .success();
    corkboard(dir)
        .args(["note", "color", "1", "blue"])
        .assert()
        .success();
    corkboard(dir)
        .args(["note", "format", "1", "bold", "0", "5"])
        .assert()
        .success();

    let saved = record(dir);
    let note = &saved["pages"][0]["notes"][0];
    assert_eq!(note["x"], 30.0);
    assert_eq!(note["y"], 10.0);
    assert_eq!(note["rotation"], -15.0);
    assert_eq!(note["color"], "blue");
    assert_eq!(note["content"], "**hello**");

    corkboard(dir)
        .args(["note", "delete", "1"])
        .assert()
        .success();
    assert!(record(dir)["pages"][0]["notes"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[test]
fn zoomed_drag_is_converted_to_page_units() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();

    corkboard(dir)
        .args(["note", "add", "zoomed", "--x", "0", "--y", "0"])
        .assert()
        .success();
    corkboard(dir)
        .args(["note", "move", "1", "15", "-30", "--zoom", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dragged at 75%"));

    let note = &record(dir)["pages"][0]["notes"][0];
    assert_eq!(note["x"], 20.0);
    assert_eq!(note["y"], -40.0);
}

#[test]
fn deleting_current_page_selects_first_remaining() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();

    corkboard(dir).args(["page", "add", "Second"]).assert().success();
    corkboard(dir).args(["page", "add", "Third"]).assert().success();
    corkboard(dir)
        .args(["page", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current page: Second"));

    let saved = record(dir);
    assert_eq!(saved["pages"][0]["name"], "Second");
    assert_eq!(saved["currentPageId"], saved["pages"][0]["id"]);
}

#[test]
fn pages_can_be_reordered_and_renamed() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();

    corkboard(dir).args(["page", "add", "B"]).assert().success();
    corkboard(dir).args(["page", "move", "2", "1"]).assert().success();
    corkboard(dir)
        .args(["page", "rename", "2", "Inbox"])
        .assert()
        .success();

    let saved = record(dir);
    let names: Vec<_> = saved["pages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["B", "Inbox"]);
}

#[test]
fn unknown_page_reference_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    corkboard(temp_dir.path())
        .args(["page", "use", "9"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Page 9 not found"));
}

#[test]
fn blank_page_name_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    corkboard(temp_dir.path())
        .args(["page", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page name cannot be empty"));
}

#[test]
fn sidebar_toggle_is_persisted() {
    let temp_dir = tempfile::tempdir().unwrap();

    corkboard(temp_dir.path())
        .arg("sidebar")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sidebar closed"));

    assert_eq!(record(temp_dir.path())["isSidebarOpen"], false);
}

#[test]
fn config_changes_default_page_name() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();

    corkboard(dir)
        .args(["config", "default-page-name", "Inbox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-page-name set to Inbox"));

    corkboard(dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default-page-name = Inbox"));

    corkboard(dir)
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inbox"));
}

#[test]
fn corrupt_record_falls_back_to_fresh_board() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();
    std::fs::write(dir.join("canvas-storage.json"), "{ definitely not json").unwrap();

    corkboard(dir)
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::contains("Untitled Page"))
        .stderr(predicate::str::contains("could not load persisted board"));

    assert_eq!(record(dir)["pages"][0]["name"], "Untitled Page");
}

#[test]
fn storage_name_cannot_escape_data_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(
        data_dir.join("config.json"),
        r#"{ "storage_name": "../elsewhere" }"#,
    )
    .unwrap();

    corkboard(&data_dir)
        .arg("pages")
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid storage name"));

    assert!(!temp_dir.path().join("elsewhere.json").exists());
    assert_eq!(record(&data_dir)["pages"][0]["name"], "Untitled Page");
}
