// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reconstruction of a [`Board`] from untyped persisted JSON.
//!
//! Stored boards may come from an older schema or be damaged, so they are never
//! deserialized directly. Validation has two tiers:
//!
//! - **Shape** (reject): a board, workstream, or card without its identity
//!   fields is unrecognizable. One rejection anywhere rejects the whole board.
//! - **Coercion** (default): every other card field has a safe default and is
//!   repaired independently.
//!
//! Unknown fields are ignored at every level.

use serde_json::{Map, Value};

use crate::board::{Board, Card, Priority, Status, Workstream};

/// Migrates a parsed value into a board, or `None` if any part of it is
/// structurally unrecognizable.
pub fn migrate_board(value: &Value) -> Option<Board> {
    let obj = value.as_object()?;
    let workstreams = obj.get("workstreams")?.as_array()?;
    let workstreams = workstreams
        .iter()
        .map(migrate_workstream)
        .collect::<Option<Vec<_>>>()?;
    Some(Board { workstreams })
}

/// Migrates one workstream. Any card that fails rejects the workstream.
pub fn migrate_workstream(value: &Value) -> Option<Workstream> {
    let obj = value.as_object()?;
    let id = obj.get("id")?.as_str()?;
    let name = obj.get("name")?.as_str()?;
    let cards = obj
        .get("cards")?
        .as_array()?
        .iter()
        .map(|card| card.as_object().and_then(migrate_card))
        .collect::<Option<Vec<_>>>()?;
    Some(Workstream {
        id: id.to_string(),
        name: name.to_string(),
        cards,
    })
}

/// Migrates one card object. Only a missing or non-string `id`/`title` rejects.
pub fn migrate_card(obj: &Map<String, Value>) -> Option<Card> {
    let id = obj.get("id")?.as_str()?;
    let title = obj.get("title")?.as_str()?;
    Some(Card {
        id: id.to_string(),
        title: title.to_string(),
        description: coerce_description(obj.get("description")),
        status: coerce_status(obj.get("status")),
        priority: coerce_priority(obj.get("priority")),
        tags: coerce_tags(obj.get("tags")),
    })
}

/// Parses raw stored text and migrates it, falling back to an empty board.
pub fn load_or_empty(raw: &str) -> Board {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!("stored board is not valid JSON, starting empty: {}", e);
            return Board::new();
        }
    };
    match migrate_board(&value) {
        Some(board) => board,
        None => {
            tracing::debug!("stored board failed migration, starting empty");
            Board::new()
        }
    }
}

fn coerce_description(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn coerce_status(value: Option<&Value>) -> Status {
    value
        .and_then(Value::as_str)
        .and_then(Status::from_wire)
        .unwrap_or_default()
}

fn coerce_priority(value: Option<&Value>) -> Option<Priority> {
    value.and_then(Value::as_str).and_then(Priority::from_wire)
}

/// All-or-nothing: one non-string element discards the whole array.
fn coerce_tags(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .and_then(|tags| {
            tags.iter()
                .map(|t| t.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        })
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "migrate_tests.rs"]
mod tests;
