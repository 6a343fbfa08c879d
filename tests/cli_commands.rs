use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn stockpile(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockpile").unwrap();
    cmd.current_dir(dir)
        .env_remove("STOCKPILE_DIR")
        .env_remove("STOCKPILE_LOG");
    cmd
}

#[test]
fn add_item_creates_group_and_tables() {
    let dir = tempfile::tempdir().unwrap();

    stockpile(dir.path())
        .args(["add-item", "Mouse", "5", "-g", "Peripherals"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Group does not exist, created group 'Peripherals'",
        ))
        .stdout(predicate::str::contains("Successfully added the item 'Mouse'."));

    let items = fs::read_to_string(dir.path().join("items.csv")).unwrap();
    let groups = fs::read_to_string(dir.path().join("groups.csv")).unwrap();
    assert!(items.starts_with("Id,Name,Quantity,GroupId\n"));
    assert!(items.contains(",Mouse,5,"));
    assert!(groups.starts_with("Id,Name\n"));
    assert!(groups.contains(",Peripherals"));
}

#[test]
fn add_item_twice_restocks() {
    let dir = tempfile::tempdir().unwrap();

    stockpile(dir.path())
        .args(["add-item", "Mouse", "5", "--group", "Peripherals"])
        .assert()
        .success();
    stockpile(dir.path())
        .args(["add-item", "Mouse", "3", "--group", "Peripherals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully updated the item 'Mouse'."))
        .stdout(predicate::str::contains("created group").not());

    stockpile(dir.path())
        .arg("list-items")
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Mouse │ 8        │ Peripherals │"));

    let items = fs::read_to_string(dir.path().join("items.csv")).unwrap();
    assert_eq!(items.lines().count(), 2);
}

#[test]
fn ungrouped_item_lists_placeholder() {
    let dir = tempfile::tempdir().unwrap();

    stockpile(dir.path())
        .args(["add-item", "Stapler", "2"])
        .assert()
        .success();

    stockpile(dir.path())
        .arg("list-items")
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Stapler │ 2        │ None  │"));
}

#[test]
fn list_items_filters_by_group() {
    let dir = tempfile::tempdir().unwrap();

    stockpile(dir.path())
        .args(["add-item", "Mouse", "5", "-g", "Peripherals"])
        .assert()
        .success();
    stockpile(dir.path())
        .args(["add-item", "Hammer", "1", "-g", "Tools"])
        .assert()
        .success();

    stockpile(dir.path())
        .args(["list-items", "-g", "Tools"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hammer"))
        .stdout(predicate::str::contains("Mouse").not());
}

#[test]
fn list_items_unknown_group_warns() {
    let dir = tempfile::tempdir().unwrap();

    stockpile(dir.path())
        .args(["list-items", "-g", "Nowhere"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Group 'Nowhere' does not exist"))
        .stdout(predicate::str::contains("No items found."));
}

#[test]
fn list_groups_shows_names() {
    let dir = tempfile::tempdir().unwrap();

    stockpile(dir.path())
        .args(["add-item", "Mouse", "5", "-g", "Peripherals"])
        .assert()
        .success();

    stockpile(dir.path())
        .arg("list-groups")
        .assert()
        .success()
        .stdout(predicate::str::contains("Peripherals"));
}

#[test]
fn data_dir_flag_overrides_working_directory() {
    let cwd = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();

    stockpile(cwd.path())
        .arg("--data-dir")
        .arg(data.path())
        .args(["add-item", "Mouse", "1"])
        .assert()
        .success();

    assert!(data.path().join("items.csv").exists());
    assert!(!cwd.path().join("items.csv").exists());
}

#[test]
fn config_file_renames_tables() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("stockpile.json"),
        r#"{ "items_file": "stock.csv", "missing_group_label": "-" }"#,
    )
    .unwrap();

    stockpile(dir.path())
        .args(["add-item", "Stapler", "2"])
        .assert()
        .success();
    assert!(dir.path().join("stock.csv").exists());

    stockpile(dir.path())
        .arg("list-items")
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Stapler │ 2        │ -     │"));
}

#[test]
fn rejects_non_positive_quantity() {
    let dir = tempfile::tempdir().unwrap();

    stockpile(dir.path())
        .args(["add-item", "Mouse", "0"])
        .assert()
        .failure();
    assert!(!dir.path().join("items.csv").exists());
}

#[test]
fn malformed_table_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("items.csv"),
        "Id,Name,Quantity,GroupId\nnot-a-uuid,Mouse,five,\n",
    )
    .unwrap();

    stockpile(dir.path())
        .arg("list-items")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}
