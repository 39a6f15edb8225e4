// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    not_initialized = { Error::NotInitialized, "kb init" },
    not_found = { Error::NotFound { kind: "lane", id: "ws-1".into() }, "lane not found: ws-1" },
    field_empty = { Error::FieldEmpty { field: "Title" }, "Title cannot be empty" },
    storage = { Error::Storage("disk full".into()), "board not saved: disk full" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn ambiguous_id_lists_matches() {
    let err = Error::AmbiguousId {
        kind: "card",
        prefix: "card-a".into(),
        matches: vec!["card-a1".into(), "card-a2".into()],
    };
    assert_eq!(
        err.to_string(),
        "ambiguous card ID 'card-a' matches: card-a1, card-a2"
    );
}

#[parameterized(
    field_empty = { kb_core::Error::FieldEmpty { field: "Tag" } },
    storage = { kb_core::Error::Storage("x".into()) },
    status = { kb_core::Error::InvalidStatus("x".into()) },
)]
fn core_errors_keep_their_message(core: kb_core::Error) {
    let expected = core.to_string();
    let err: Error = core.into();
    assert!(err.to_string().starts_with(expected.lines().next().unwrap()));
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}
