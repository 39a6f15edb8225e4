// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

// Status parsing tests
#[parameterized(
    backlog = { "backlog", Status::Backlog },
    in_progress = { "in-progress", Status::InProgress },
    in_progress_snake = { "in_progress", Status::InProgress },
    in_progress_upper = { "IN-PROGRESS", Status::InProgress },
    done = { "done", Status::Done },
    padded = { "  done ", Status::Done },
)]
fn status_from_str_valid(input: &str, expected: Status) {
    assert_eq!(input.parse::<Status>().unwrap(), expected);
}

#[parameterized(
    invalid = { "doing" },
    empty = { "" },
)]
fn status_from_str_invalid(input: &str) {
    assert!(input.parse::<Status>().is_err());
}

#[parameterized(
    backlog = { Status::Backlog, "backlog", "Backlog" },
    in_progress = { Status::InProgress, "in-progress", "In Progress" },
    done = { Status::Done, "done", "Done" },
)]
fn status_wire_and_label(status: Status, wire: &str, label: &str) {
    assert_eq!(status.as_str(), wire);
    assert_eq!(status.label(), label);
    assert_eq!(Status::from_wire(wire), Some(status));
}

#[test]
fn status_from_wire_is_exact() {
    assert_eq!(Status::from_wire("in_progress"), None);
    assert_eq!(Status::from_wire("Backlog"), None);
}

#[test]
fn status_order_and_default() {
    assert_eq!(
        Status::ALL,
        [Status::Backlog, Status::InProgress, Status::Done]
    );
    assert_eq!(Status::default(), Status::Backlog);
}

#[parameterized(
    low = { "low", Priority::Low },
    medium = { "medium", Priority::Medium },
    med = { "med", Priority::Medium },
    high = { "HIGH", Priority::High },
    urgent = { "urgent", Priority::Urgent },
)]
fn priority_from_str_valid(input: &str, expected: Priority) {
    assert_eq!(input.parse::<Priority>().unwrap(), expected);
}

#[test]
fn priority_from_str_invalid() {
    let err = "p0".parse::<Priority>().unwrap_err();
    assert!(matches!(err, Error::InvalidPriority(_)));
}

#[test]
fn priority_from_wire_is_exact() {
    assert_eq!(Priority::from_wire("urgent"), Some(Priority::Urgent));
    assert_eq!(Priority::from_wire("Urgent"), None);
    assert_eq!(Priority::from_wire("med"), None);
}

#[test]
fn card_serializes_in_storage_shape() {
    let card = Card::new("c1", "Title").with_status(Status::InProgress);
    let json = serde_json::to_value(&card).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "c1",
            "title": "Title",
            "description": "",
            "status": "in-progress",
            "priority": null,
            "tags": []
        })
    );
}

#[test]
fn priority_serializes_lowercase() {
    let card = Card::new("c1", "T").with_priority(Some(Priority::Urgent));
    let json = serde_json::to_value(&card).unwrap();
    assert_eq!(json["priority"], "urgent");
}

fn sample_workstream() -> Workstream {
    let mut ws = Workstream::new("w1", "Sprint");
    ws.cards = vec![
        Card::new("a", "A"),
        Card::new("b", "B").with_status(Status::InProgress),
        Card::new("c", "C"),
    ];
    ws
}

#[test]
fn column_filters_in_flat_order() {
    let ws = sample_workstream();
    let backlog: Vec<_> = ws.column(Status::Backlog).map(|c| c.id.as_str()).collect();
    assert_eq!(backlog, vec!["a", "c"]);
    assert_eq!(ws.column(Status::Done).count(), 0);
}

#[test]
fn board_lookups() {
    let mut board = Board::new();
    assert!(board.is_empty());
    board.workstreams.push(Workstream::new("w0", "Empty"));
    board.workstreams.push(sample_workstream());

    assert_eq!(board.owner_index("b"), Some(1));
    assert_eq!(board.owner_index("zzz"), None);
    let (ws, card) = board.find_card("c").unwrap();
    assert_eq!(ws.id, "w1");
    assert_eq!(card.title, "C");
    assert_eq!(board.card_count(), 3);
    assert!(board.contains_id("w0"));
    assert!(board.contains_id("a"));
    assert!(!board.contains_id("nope"));
}
