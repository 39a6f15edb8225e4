// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

#[test]
fn creates_work_dir() {
    let temp = TempDir::new().unwrap();

    kb().arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized board"));

    assert!(temp.path().join(".kb/config.toml").exists());
    assert_eq!(board_json(&temp), serde_json::json!({ "workstreams": [] }));
}

#[test]
fn init_at_explicit_path() {
    let temp = TempDir::new().unwrap();

    kb().args(["init", "nested/project"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("nested/project/.kb/board.json").exists());
}

#[test]
fn fails_if_already_initialized() {
    let temp = init_temp();

    kb().arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn commands_fail_before_init() {
    let temp = TempDir::new().unwrap();

    kb().arg("show")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("kb init"));
}

#[test]
fn subdirectories_find_the_board() {
    let temp = init_temp();
    let nested = temp.path().join("src/deep");
    std::fs::create_dir_all(&nested).unwrap();

    kb().args(["lane", "new", "From below"])
        .current_dir(&nested)
        .assert()
        .success();

    assert_eq!(board_json(&temp)["workstreams"][0]["name"], "From below");
}

#[test]
fn directory_flag_changes_project() {
    let temp = init_temp();
    let elsewhere = TempDir::new().unwrap();

    kb().args(["lane", "new", "Remote"])
        .arg("-C")
        .arg(temp.path())
        .current_dir(elsewhere.path())
        .assert()
        .success();

    assert_eq!(board_json(&temp)["workstreams"][0]["name"], "Remote");
}

#[test]
fn configured_board_path_is_used() {
    let temp = init_temp();
    std::fs::write(
        temp.path().join(".kb/config.toml"),
        "board = \"boards/team.json\"\n",
    )
    .unwrap();

    kb().args(["lane", "new", "Team"])
        .current_dir(temp.path())
        .assert()
        .success();

    let text = std::fs::read_to_string(temp.path().join("boards/team.json")).unwrap();
    assert!(text.contains("\"Team\""));
}
