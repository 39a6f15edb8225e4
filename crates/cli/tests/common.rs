// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn kb() -> Command {
    let mut cmd = cargo_bin_cmd!("kb");
    cmd.env_remove("KB_LOG").env("NO_COLOR", "1");
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    kb().arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to create a lane and return its ID
pub fn create_lane(temp: &TempDir, name: &str) -> String {
    let output = kb()
        .args(["lane", "new", name])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    String::from_utf8_lossy(&output.stdout)
        .trim()
        .rsplit('(')
        .next()
        .unwrap()
        .trim_end_matches(')')
        .to_string()
}

/// Helper to create a card and return its ID
pub fn create_card(temp: &TempDir, lane: &str, title: &str, extra: &[&str]) -> String {
    let output = kb()
        .args(["card", "new", lane, title])
        .args(extra)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    String::from_utf8_lossy(&output.stdout)
        .split_whitespace()
        .find(|s| s.starts_with("card-"))
        .unwrap()
        .to_string()
}

/// Read the stored board as JSON
pub fn board_json(temp: &TempDir) -> serde_json::Value {
    let text = std::fs::read_to_string(temp.path().join(".kb/board.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

/// Titles of one lane's cards, in stored order
pub fn card_titles(temp: &TempDir, lane_index: usize) -> Vec<String> {
    board_json(temp)["workstreams"][lane_index]["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap().to_string())
        .collect()
}
