// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;
use yare::parameterized;

#[test]
fn new_card_with_fields() {
    let temp = init_temp();
    let lane = create_lane(&temp, "Lane");
    let id = create_card(
        &temp,
        &lane,
        "Crash",
        &["-d", "on save", "-s", "in-progress", "-p", "urgent", "-t", "bug,ui"],
    );

    let card = &board_json(&temp)["workstreams"][0]["cards"][0];
    assert_eq!(card["id"], id.as_str());
    assert_eq!(card["description"], "on save");
    assert_eq!(card["status"], "in-progress");
    assert_eq!(card["priority"], "urgent");
    assert_eq!(card["tags"], serde_json::json!(["bug", "ui"]));
}

#[parameterized(
    status = { "-s", "later", "invalid status" },
    priority = { "-p", "p0", "invalid priority" },
)]
fn new_card_rejects_invalid_field(flag: &str, value: &str, message: &str) {
    let temp = init_temp();
    let lane = create_lane(&temp, "Lane");

    kb().args(["card", "new", &lane, "Card", flag, value])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));

    assert!(card_titles(&temp, 0).is_empty());
}

#[test]
fn move_card_within_column_order() {
    let temp = init_temp();
    let lane = create_lane(&temp, "Lane");
    let a = create_card(&temp, &lane, "A", &[]);
    create_card(&temp, &lane, "B", &["-s", "in-progress"]);
    create_card(&temp, &lane, "C", &[]);

    kb().args(["card", "mv", &a, "in-progress", "-i", "1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("In Progress"));

    assert_eq!(card_titles(&temp, 0), vec!["B", "A", "C"]);
}

#[test]
fn move_card_to_other_lane() {
    let temp = init_temp();
    let from = create_lane(&temp, "From");
    let to = create_lane(&temp, "To");
    let card = create_card(&temp, &from, "Card", &[]);

    kb().args(["card", "mv", &card, "done", "--lane", &to])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(card_titles(&temp, 0).is_empty());
    assert_eq!(card_titles(&temp, 1), vec!["Card"]);
    assert_eq!(board_json(&temp)["workstreams"][1]["cards"][0]["status"], "done");
}

#[test]
fn edit_keeps_other_fields() {
    let temp = init_temp();
    let lane = create_lane(&temp, "Lane");
    let card = create_card(&temp, &lane, "Old", &["-p", "high", "-t", "x"]);

    kb().args(["card", "edit", &lane, &card, "--title", "New"])
        .current_dir(temp.path())
        .assert()
        .success();

    let stored = &board_json(&temp)["workstreams"][0]["cards"][0];
    assert_eq!(stored["title"], "New");
    assert_eq!(stored["priority"], "high");
    assert_eq!(stored["tags"], serde_json::json!(["x"]));
}

#[test]
fn tag_is_deduplicated() {
    let temp = init_temp();
    let lane = create_lane(&temp, "Lane");
    let card = create_card(&temp, &lane, "Card", &[]);

    for _ in 0..2 {
        kb().args(["card", "tag", &lane, &card, "bug"])
            .current_dir(temp.path())
            .assert()
            .success();
    }

    let tags = &board_json(&temp)["workstreams"][0]["cards"][0]["tags"];
    assert_eq!(tags, &serde_json::json!(["bug"]));

    kb().args(["card", "untag", &lane, &card, "bug"])
        .current_dir(temp.path())
        .assert()
        .success();
    let tags = &board_json(&temp)["workstreams"][0]["cards"][0]["tags"];
    assert_eq!(tags, &serde_json::json!([]));
}

#[test]
fn remove_card_requires_confirmation() {
    let temp = init_temp();
    let lane = create_lane(&temp, "Lane");
    let card = create_card(&temp, &lane, "Card", &[]);

    kb().args(["card", "rm", &lane, &card])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept"));
    assert_eq!(card_titles(&temp, 0), vec!["Card"]);

    kb().args(["card", "rm", &lane, &card, "--yes"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));
    assert!(card_titles(&temp, 0).is_empty());
}

#[test]
fn unknown_card_reports_not_found() {
    let temp = init_temp();
    let lane = create_lane(&temp, "Lane");

    kb().args(["card", "mv", "card-nothere", "done"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("card not found"));

    kb().args(["card", "tag", &lane, "card-nothere", "bug"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("card not found"));
}
